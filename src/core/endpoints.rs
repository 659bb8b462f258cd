use crate::domain::ports::ConfigProvider;

pub const DEFAULT_DOG_API_BASE: &str = "https://dog.ceo/api";
pub const DEFAULT_COMMENTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/comments";

/// 四個遠端端點的 URL 組裝
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    dog_api_base: String,
    comments: String,
}

impl Endpoints {
    pub fn new(dog_api_base: &str, comments: &str) -> Self {
        Self {
            dog_api_base: dog_api_base.trim_end_matches('/').to_string(),
            comments: comments.to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.dog_api_base(), config.comments_endpoint())
    }

    pub fn breeds_list(&self) -> String {
        format!("{}/breeds/list", self.dog_api_base)
    }

    pub fn random_image(&self) -> String {
        format!("{}/breeds/image/random", self.dog_api_base)
    }

    /// 品種名稱原樣代入，是否有效交給遠端判斷
    pub fn breed_image(&self, breed: &str) -> String {
        format!("{}/breed/{}/images/random", self.dog_api_base, breed)
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_DOG_API_BASE, DEFAULT_COMMENTS_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.breeds_list(), "https://dog.ceo/api/breeds/list");
        assert_eq!(
            endpoints.random_image(),
            "https://dog.ceo/api/breeds/image/random"
        );
        assert_eq!(
            endpoints.breed_image("akita"),
            "https://dog.ceo/api/breed/akita/images/random"
        );
        assert_eq!(
            endpoints.comments(),
            "https://jsonplaceholder.typicode.com/comments"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let endpoints = Endpoints::new("http://localhost:8080/api/", "http://localhost:8080/c");
        assert_eq!(endpoints.breeds_list(), "http://localhost:8080/api/breeds/list");
    }

    #[test]
    fn test_empty_breed_is_substituted_verbatim() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.breed_image(""),
            "https://dog.ceo/api/breed//images/random"
        );
    }
}
