use serde::{Deserialize, Serialize};

/// 缺少出版年份時使用的佔位值
pub const MISSING_YEAR: &str = "N/A";
/// 作者沒有機構資訊時使用的佔位值
pub const UNKNOWN_AFFILIATION: &str = "Unknown";
/// 通訊作者 Email 尚未實作，固定輸出佔位值
pub const EMAIL_PLACEHOLDER: &str = "N/A";

/// 報表欄位，順序固定
pub const REPORT_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub affiliation: String,
}

impl AuthorRecord {
    /// 由名與姓組成顯示名稱，空的部分會被省略
    ///
    /// 缺少或只有空白的機構一律記為 `"Unknown"`，不保留原始空白文字。
    pub fn new(fore_name: Option<&str>, last_name: Option<&str>, affiliation: Option<String>) -> Self {
        let name = format!("{} {}", fore_name.unwrap_or(""), last_name.unwrap_or(""))
            .trim()
            .to_string();
        let affiliation = affiliation
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AFFILIATION.to_string());

        Self { name, affiliation }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub pmid: String,
    pub title: Option<String>,
    pub publication_year: String,
    pub authors: Vec<AuthorRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "PubmedID")]
    pub pmid: String,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub fetched_papers: Vec<PaperRecord>,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub reported: usize,
    pub output_path: Option<String>,
}
