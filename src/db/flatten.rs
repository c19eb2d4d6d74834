//! Join flattening
//!
//! Rebuilds the article → comments tree from the flat rows of
//!
//! ```sql
//! SELECT ... FROM articles a
//! LEFT OUTER JOIN comments c ON c.article_id = a.id
//! ORDER BY a.id DESC, c.id ASC
//! ```
//!
//! Rows of one article must be contiguous. A row whose comment is `None`
//! is LEFT JOIN padding for an article without comments.
//!
//! Nothing here touches `sqlx`: each driver decodes its rows into
//! [`JoinedRow`] and hands them over.

use crate::models::{Article, Comment};

/// One row of the article/comment join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRow {
    pub article_id: i64,
    pub article_name: String,
    pub article_content: String,
    pub comment: Option<Comment>,
}

impl JoinedRow {
    /// A row for an article with no comment attached
    pub fn article_only(id: i64, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            article_id: id,
            article_name: name.into(),
            article_content: content.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// Accumulates joined rows into articles, one row at a time
#[derive(Debug, Default)]
pub struct ArticleGrouper {
    articles: Vec<Article>,
}

impl ArticleGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next row in query order
    pub fn push(&mut self, row: JoinedRow) {
        let starts_group = self
            .articles
            .last()
            .map_or(true, |article| article.id != row.article_id);

        if starts_group {
            self.articles.push(Article::new(
                row.article_id,
                row.article_name,
                row.article_content,
            ));
        }

        if let (Some(comment), Some(current)) = (row.comment, self.articles.last_mut()) {
            current.comments.push(comment);
        }
    }

    pub fn finish(self) -> Vec<Article> {
        self.articles
    }
}

/// Group joined rows into articles with their comments
pub fn flatten_rows<I>(rows: I) -> Vec<Article>
where
    I: IntoIterator<Item = JoinedRow>,
{
    let mut grouper = ArticleGrouper::new();
    for row in rows {
        grouper.push(row);
    }
    grouper.finish()
}

/// Like [`flatten_rows`], stopping at the first row that failed to decode
pub fn try_flatten_rows<I, E>(rows: I) -> Result<Vec<Article>, E>
where
    I: IntoIterator<Item = Result<JoinedRow, E>>,
{
    let mut grouper = ArticleGrouper::new();
    for row in rows {
        grouper.push(row?);
    }
    Ok(grouper.finish())
}
