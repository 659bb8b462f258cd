use serde::{Deserialize, Serialize};
use std::fmt;

/// dog API 的回應外殼，所有端點都把資料放在 `message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage<T> {
    pub message: T,
}

/// 伺服器回傳的品種名稱，保留原順序
pub type BreedList = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageReference {
    pub url: String,
    pub alt: String,
}

impl ImageReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: String::new(),
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }
}

/// 顯示區塊：一張圖片加上一行說明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image: ImageReference,
    pub caption: String,
}

impl Card {
    /// 啟動時的隨機圖片，說明文字引用目前選取的品種
    pub fn initial(image: ImageReference, selected: &str) -> Self {
        Self {
            image,
            caption: format!("Click to view images of {}s", selected),
        }
    }

    pub fn for_breed(image: ImageReference, breed: &str) -> Self {
        Self {
            image: image.with_alt(breed),
            caption: format!("Click to view more {}s", breed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSubmission {
    pub name: String,
    pub comment: String,
}

impl CommentSubmission {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
        }
    }
}

/// 啟動時兩個請求合併後的結果，順序與發出順序一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupData {
    pub breeds: BreedList,
    pub image: ImageReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Startup,
    BreedImage,
    Comment,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Startup => "startup",
            Action::BreedImage => "breed_image",
            Action::Comment => "comment",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_submission_serializes_empty_fields() {
        let body = serde_json::to_string(&CommentSubmission::new("", "")).unwrap();
        assert_eq!(body, r#"{"name":"","comment":""}"#);
    }

    #[test]
    fn test_card_captions() {
        let card = Card::initial(ImageReference::new("https://img/x.jpg"), "akita");
        assert_eq!(card.caption, "Click to view images of akitas");
        assert!(card.image.alt.is_empty());

        let card = Card::for_breed(ImageReference::new("https://img/y.jpg"), "beagle");
        assert_eq!(card.caption, "Click to view more beagles");
        assert_eq!(card.image.alt, "beagle");
    }

    #[test]
    fn test_api_message_decodes_breed_list() {
        let msg: ApiMessage<BreedList> =
            serde_json::from_str(r#"{"message":["akita","beagle"],"status":"success"}"#).unwrap();
        assert_eq!(msg.message, vec!["akita".to_string(), "beagle".to_string()]);
    }
}
