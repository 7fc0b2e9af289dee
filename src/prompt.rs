// 固定的泰语学术分析提示词，只替换最后一行的单词
pub fn build_classification_prompt(word: &str) -> String {
    format!(r#"
คุณคือระบบวิเคราะห์คำภาษาไทยเชิงวิชาการ
หน้าที่ของคุณคือจำแนกชนิดของคำภาษาไทยอย่างถูกต้องตามหลักภาษา

กรุณาวิเคราะห์คำต่อไปนี้:
1) ระบุชนิดของคำ โดยเลือกชนิดที่เหมาะสมที่สุดเพียงหนึ่งชนิดจาก
   - คำประสม
   - คำซ้อน
   - คำสมาส
   - คำสนธิ
   - คำแผลง
   - หากไม่ใช่ 5 ชนิดข้างต้น ให้ระบุว่าเป็น "คำไทยดั้งเดิม" หรือ "คำยืมจากต่างประเทศ" ตามความเหมาะสม
2) อธิบายหลักเกณฑ์ที่ใช้ในการจำแนกแบบสั้นและชัดเจน (ไม่เกิน 1–2 ประโยค)
3) ให้ความหมายเบื้องต้นของคำในระดับนักเรียน

ข้อกำหนด:
- พยายามจำแนกให้ได้ทุกคำ หากเป็นคำมูลหรือคำพื้นฐานให้ระบุตามหลักภาษาอย่างถูกต้อง
- ห้ามกล่าวถึง AI, ChatGPT หรือเทคโนโลยีใด ๆ
- ใช้ภาษาทางการ เข้าใจง่าย

คำที่ต้องการวิเคราะห์คือ: "{}"
"#, word)
}
