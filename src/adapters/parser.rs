//! efetch XML parser using quick-xml
//!
//! Streams through a `PubmedArticleSet` document and builds one
//! [`PaperRecord`] per `PubmedArticle`.

use crate::domain::model::{AuthorRecord, PaperRecord, MISSING_YEAR};
use crate::utils::error::{PapersError, Result};
use quick_xml::errors::SyntaxError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// 目前正在收集文字的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pmid,
    Title,
    Year,
    ForeName,
    LastName,
    Affiliation,
}

#[derive(Debug, Default)]
struct AuthorBuilder {
    depth: usize,
    fore_name: Option<String>,
    last_name: Option<String>,
    affiliation: Option<String>,
}

impl AuthorBuilder {
    fn build(self) -> AuthorRecord {
        AuthorRecord::new(
            self.fore_name.as_deref(),
            self.last_name.as_deref(),
            self.affiliation,
        )
    }
}

#[derive(Debug, Default)]
struct ArticleBuilder {
    pmid: Option<String>,
    title: Option<String>,
    publication_year: Option<String>,
    authors: Vec<AuthorRecord>,
}

impl ArticleBuilder {
    fn build(self, record_index: usize) -> Result<PaperRecord> {
        let pmid = self.pmid.ok_or_else(|| PapersError::MissingFieldError {
            record_index,
            field: "PMID".to_string(),
        })?;

        Ok(PaperRecord {
            pmid,
            title: self.title,
            publication_year: self
                .publication_year
                .unwrap_or_else(|| MISSING_YEAR.to_string()),
            authors: self.authors,
        })
    }
}

/// Parse every `PubmedArticle` in an efetch response, in document order.
///
/// Documents without articles (an empty body or an NCBI error document)
/// yield an empty list. A record without a PMID is an error.
pub fn parse_article_set(xml: &str) -> Result<Vec<PaperRecord>> {
    let mut reader = Reader::from_str(xml);
    let mut papers = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"PubmedArticle" => {
                let article = parse_article(&mut reader)?;
                papers.push(article.build(papers.len())?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    tracing::debug!("Parsed {} PubMed articles", papers.len());
    Ok(papers)
}

fn parse_article(reader: &mut Reader<&[u8]>) -> Result<ArticleBuilder> {
    let mut article = ArticleBuilder::default();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut author: Option<AuthorBuilder> = None;
    // (欄位, 所在深度, 已收集的文字)
    let mut capture: Option<(Field, usize, String)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                let parent = path.last().cloned();
                path.push(name.clone());
                let depth = path.len();

                if capture.is_some() {
                    continue;
                }

                let field = match (name.as_slice(), parent.as_deref()) {
                    (b"PMID", _) if article.pmid.is_none() => Some(Field::Pmid),
                    (b"ArticleTitle", _) if article.title.is_none() => Some(Field::Title),
                    (b"Year", Some(b"PubDate")) if article.publication_year.is_none() => {
                        Some(Field::Year)
                    }
                    (b"Author", _) => {
                        author = Some(AuthorBuilder {
                            depth,
                            ..AuthorBuilder::default()
                        });
                        None
                    }
                    (b"ForeName", Some(b"Author")) => author
                        .as_ref()
                        .filter(|a| a.fore_name.is_none())
                        .map(|_| Field::ForeName),
                    (b"LastName", Some(b"Author")) => author
                        .as_ref()
                        .filter(|a| a.last_name.is_none())
                        .map(|_| Field::LastName),
                    (b"Affiliation", _) => author
                        .as_ref()
                        .filter(|a| a.affiliation.is_none())
                        .map(|_| Field::Affiliation),
                    _ => None,
                };

                if let Some(field) = field {
                    capture = Some((field, depth, String::new()));
                }
            }
            Event::Empty(e) if e.name().as_ref() == b"Author" && capture.is_none() => {
                article.authors.push(AuthorBuilder::default().build());
            }
            Event::Text(e) => {
                if let Some((_, _, text)) = capture.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some((_, _, text)) = capture.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(e) => {
                let depth = path.len();

                if matches!(capture, Some((_, d, _)) if d == depth) {
                    if let Some((field, _, text)) = capture.take() {
                        store_field(&mut article, author.as_mut(), field, text);
                    }
                }

                if e.name().as_ref() == b"Author" && matches!(author, Some(ref a) if a.depth == depth)
                {
                    if let Some(done) = author.take() {
                        article.authors.push(done.build());
                    }
                }

                path.pop();
                if e.name().as_ref() == b"PubmedArticle" && path.is_empty() {
                    break;
                }
            }
            // 文章尚未結束就到文件尾，視為被截斷的回應
            Event::Eof => {
                return Err(PapersError::XmlError(quick_xml::Error::Syntax(
                    SyntaxError::UnclosedTag,
                )))
            }
            _ => {}
        }
    }

    Ok(article)
}

fn store_field(
    article: &mut ArticleBuilder,
    author: Option<&mut AuthorBuilder>,
    field: Field,
    text: String,
) {
    let text = text.trim().to_string();
    match (field, author) {
        (Field::Pmid, _) => article.pmid = Some(text),
        (Field::Title, _) => article.title = Some(text),
        (Field::Year, _) => article.publication_year = Some(text),
        (Field::ForeName, Some(author)) => author.fore_name = Some(text),
        (Field::LastName, Some(author)) => author.last_name = Some(text),
        (Field::Affiliation, Some(author)) => author.affiliation = Some(text),
        _ => {}
    }
}
