//! Application Configuration

use platform::http_client::HttpClientConfig;

/// Instruction sent with every conversation
pub const SYSTEM_INSTRUCTION: &str = "คุณคือ \"สาวน้อย\" ผู้ช่วยของระบบทะเบียนหนังสือรับรองของงานทรัพยากรบุคคล \
ตอบเป็นภาษาไทยอย่างสุภาพ กระชับ และเป็นกันเอง ใช้คำลงท้าย \"ค่ะ\" \
ช่วยอธิบายประเภทหนังสือรับรอง (รับรองเงินเดือน รับรองปฏิบัติงาน หนังสือรับรองสำหรับธนาคาร บัตรพนักงาน \
และหนังสือรับรองภาษาอังกฤษ ซึ่งหากใช้ขอวีซ่าต้องระบุประเทศปลายทาง) \
ขั้นตอนการยื่นคำขอผ่านแบบฟอร์ม การติดตามสถานะด้วยชื่อหรือเลขที่คำขอ \
และการลงชื่อรับเอกสารเมื่อเอกสารส่งคืนแล้ว \
ห้ามเปิดเผยข้อมูลส่วนบุคคลของผู้อื่น และหากไม่ทราบคำตอบให้แนะนำติดต่องานทรัพยากรบุคคลโดยตรง";

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Without a key every reply is the connection apology
    pub api_key: Option<String>,
    pub model: String,
    /// Base of the `models/{model}:generateContent` endpoint
    pub base_url: String,
    pub temperature: f32,
    pub system_instruction: String,
    pub http: HttpClientConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.7,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            http: HttpClientConfig::default(),
        }
    }
}

impl AssistantConfig {
    pub fn development() -> Self {
        Self::default()
    }

    /// Blank keys count as missing
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
