use crate::domain::model::{PaperRecord, ReportRow, EMAIL_PLACEHOLDER};
use crate::utils::error::{PapersError, Result};
use regex::{Regex, RegexBuilder};

/// 預設的學術機構關鍵字
pub const DEFAULT_ACADEMIC_KEYWORDS: [&str; 3] = ["university", "college", "institute"];

/// 以關鍵字判斷機構是否為學術單位（不分大小寫的子字串比對）。
///
/// 縮寫（例如 "MIT"）與非英文校名不會被辨識為學術單位。
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    pattern: Regex,
}

impl AffiliationClassifier {
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        if keywords.is_empty() {
            return Err(PapersError::MissingConfigError {
                field: "filter.academic_keywords".to_string(),
            });
        }
        // 空白關鍵字會匹配任何字串
        if keywords.iter().any(|k| k.as_ref().trim().is_empty()) {
            return Err(PapersError::InvalidConfigValueError {
                field: "filter.academic_keywords".to_string(),
                value: String::new(),
                reason: "Keywords cannot be empty or whitespace-only".to_string(),
            });
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k.as_ref().trim()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;

        Ok(Self { pattern })
    }

    pub fn is_academic(&self, affiliation: &str) -> bool {
        self.pattern.is_match(affiliation)
    }
}

/// 保留至少有一位非學術作者的文章，並攤平為報表列
pub fn filter_non_academic(
    papers: &[PaperRecord],
    classifier: &AffiliationClassifier,
) -> Vec<ReportRow> {
    papers
        .iter()
        .filter_map(|paper| {
            let (names, affiliations): (Vec<&str>, Vec<&str>) = paper
                .authors
                .iter()
                .filter(|author| !classifier.is_academic(&author.affiliation))
                .map(|author| (author.name.as_str(), author.affiliation.as_str()))
                .unzip();

            if names.is_empty() {
                return None;
            }

            Some(ReportRow {
                pmid: paper.pmid.clone(),
                title: paper.title.clone(),
                publication_date: paper.publication_year.clone(),
                non_academic_authors: names.join(", "),
                company_affiliations: affiliations.join(", "),
                corresponding_author_email: EMAIL_PLACEHOLDER.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AuthorRecord, UNKNOWN_AFFILIATION};

    fn author(name: &str, affiliation: &str) -> AuthorRecord {
        AuthorRecord {
            name: name.to_string(),
            affiliation: affiliation.to_string(),
        }
    }

    fn default_classifier() -> AffiliationClassifier {
        AffiliationClassifier::from_keywords(&DEFAULT_ACADEMIC_KEYWORDS).unwrap()
    }

    fn paper(pmid: &str, authors: Vec<AuthorRecord>) -> PaperRecord {
        PaperRecord {
            pmid: pmid.to_string(),
            title: Some(format!("Paper {}", pmid)),
            publication_year: "2024".to_string(),
            authors,
        }
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let classifier = default_classifier();
        assert!(classifier.is_academic("UNIVERSITY OF X"));
        assert!(classifier.is_academic("Acme Institute"));
        assert!(classifier.is_academic("Imperial College London"));
        assert!(!classifier.is_academic("Acme Corp"));
    }

    #[test]
    fn test_custom_keywords_are_escaped() {
        let classifier =
            AffiliationClassifier::from_keywords(&["hospital", "c.n.r.s"]).unwrap();
        assert!(classifier.is_academic("General Hospital"));
        assert!(classifier.is_academic("C.N.R.S Paris"));
        assert!(!classifier.is_academic("CxNxRxS"));
        assert!(!classifier.is_academic("Stanford University"));
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let keywords: [&str; 0] = [];
        assert!(AffiliationClassifier::from_keywords(&keywords).is_err());
        assert!(AffiliationClassifier::from_keywords(&["university", " "]).is_err());
    }

    #[test]
    fn test_keeps_only_non_academic_authors_in_order() {
        let papers = vec![paper(
            "1",
            vec![
                author("A", "Acme Corp"),
                author("B", "University of Oxford"),
                author("C", "Globex Pharma"),
            ],
        )];

        let rows = filter_non_academic(&papers, &default_classifier());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pmid, "1");
        assert_eq!(rows[0].title.as_deref(), Some("Paper 1"));
        assert_eq!(rows[0].publication_date, "2024");
        assert_eq!(rows[0].non_academic_authors, "A, C");
        assert_eq!(rows[0].company_affiliations, "Acme Corp, Globex Pharma");
        assert_eq!(rows[0].corresponding_author_email, "N/A");
    }

    #[test]
    fn test_all_academic_paper_dropped() {
        let papers = vec![
            paper("1", vec![author("A", "MIT College")]),
            paper("2", vec![author("B", "Acme Inc")]),
        ];

        let rows = filter_non_academic(&papers, &default_classifier());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pmid, "2");
    }

    #[test]
    fn test_paper_without_authors_never_reported() {
        let papers = vec![paper("1", vec![])];
        assert!(filter_non_academic(&papers, &default_classifier()).is_empty());
    }

    #[test]
    fn test_abbreviated_institution_counts_as_non_academic() {
        // "MIT" has none of the keywords, so both authors are reported.
        let papers = vec![paper(
            "1",
            vec![author("A", "MIT"), author("B", "Acme Inc")],
        )];

        let rows = filter_non_academic(&papers, &default_classifier());

        assert_eq!(rows[0].non_academic_authors, "A, B");
        assert_eq!(rows[0].company_affiliations, "MIT, Acme Inc");
    }

    #[test]
    fn test_unknown_and_empty_affiliations_count_as_non_academic() {
        let papers = vec![paper(
            "7",
            vec![author("A", UNKNOWN_AFFILIATION), author("B", "")],
        )];

        let rows = filter_non_academic(&papers, &default_classifier());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].non_academic_authors, "A, B");
        assert_eq!(rows[0].company_affiliations, "Unknown, ");
    }

    #[test]
    fn test_filter_is_idempotent_and_preserves_order() {
        let papers = vec![
            paper("3", vec![author("C", "Initech")]),
            paper("1", vec![author("A", "Stanford University")]),
            paper("2", vec![author("B", "Umbrella Corp")]),
        ];
        let classifier = default_classifier();

        let first = filter_non_academic(&papers, &classifier);
        let second = filter_non_academic(&papers, &classifier);

        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|r| r.pmid.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }
}
