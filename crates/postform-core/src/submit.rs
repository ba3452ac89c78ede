//! What a successful submit produces.
//!
//! Submitting does not send anything anywhere; the draft is echoed back to
//! the author as pretty-printed JSON.

use crate::draft::DraftPost;
use crate::error::PostFormError;

pub const SUBMIT_NOTICE_TITLE: &str = "You submitted the following values:";

/// A validated draft together with its serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    draft: DraftPost,
    json: String,
}

impl Submission {
    pub fn new(draft: DraftPost) -> Result<Self, PostFormError> {
        let json = serde_json::to_string_pretty(&draft)?;
        Ok(Self { draft, json })
    }

    pub fn draft(&self) -> &DraftPost {
        &self.draft
    }

    /// The draft as JSON with two-space indentation.
    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn notice(&self) -> SubmitNotice {
        SubmitNotice {
            title: SUBMIT_NOTICE_TITLE.to_string(),
            body: self.json.clone(),
        }
    }
}

/// Text for the toast shown after submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitNotice {
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_echoes_the_json() {
        let submission = Submission::new(DraftPost::default()).unwrap();
        let notice = submission.notice();
        assert_eq!(notice.title, SUBMIT_NOTICE_TITLE);
        assert_eq!(notice.body, submission.json());
    }

    #[test]
    fn json_parses_back_to_the_draft() {
        let draft = DraftPost {
            title: "Quotes \"inside\"".into(),
            content: "line one\nline two".into(),
            is_premium: true,
            ..DraftPost::default()
        };
        let submission = Submission::new(draft.clone()).unwrap();
        let parsed: DraftPost = serde_json::from_str(submission.json()).unwrap();
        assert_eq!(parsed, draft);
    }
}
