//! Thin HTTP implementation of [`GalleryClient`] against the site's JSON
//! API. Request construction only; all typed decoding goes through serde.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::clients::gallery::{GalleryClient, GalleryContents, GalleryDetailPayload};
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Gallery, GalleryComment, GalleryDetail, GalleryList, GalleryTag, PageNumber};

pub struct HttpGalleryClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ListEnvelope {
    current: u64,
    maximum: u64,
    galleries: Vec<Gallery>,
}

impl From<ListEnvelope> for GalleryList {
    fn from(envelope: ListEnvelope) -> Self {
        GalleryList {
            page: PageNumber {
                current: envelope.current,
                maximum: envelope.maximum,
            },
            galleries: envelope.galleries,
        }
    }
}

#[derive(Deserialize)]
struct DetailEnvelope {
    detail: GalleryDetail,
    #[serde(default)]
    tags: Vec<GalleryTag>,
    #[serde(default)]
    preview_urls: BTreeMap<u32, String>,
    #[serde(default)]
    comments: Vec<GalleryComment>,
    #[serde(default)]
    api_key: String,
}

#[derive(Deserialize)]
struct ContentsEnvelope {
    current: u64,
    maximum: u64,
    contents: BTreeMap<u32, String>,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    message: String,
}

impl HttpGalleryClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, path, "gallery api get");
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json(&self, path: &str, body: serde_json::Value) -> Result<(), AppError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, path, "gallery api post");
        self.http
            .post(self.url(path))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl GalleryClient for HttpGalleryClient {
    async fn frontpage(&self, page: u64, last_id: Option<String>) -> Result<GalleryList, AppError> {
        let mut query = vec![("page", page.to_string())];
        if let Some(last_id) = last_id {
            query.push(("last_id", last_id));
        }
        let envelope: ListEnvelope = self.get_json("/api/frontpage", &query).await?;
        Ok(envelope.into())
    }

    async fn popular(&self) -> Result<GalleryList, AppError> {
        let envelope: ListEnvelope = self.get_json("/api/popular", &[]).await?;
        Ok(envelope.into())
    }

    async fn search(
        &self,
        keyword: String,
        page: u64,
        last_id: Option<String>,
    ) -> Result<GalleryList, AppError> {
        let mut query = vec![("keyword", keyword), ("page", page.to_string())];
        if let Some(last_id) = last_id {
            query.push(("last_id", last_id));
        }
        let envelope: ListEnvelope = self.get_json("/api/search", &query).await?;
        Ok(envelope.into())
    }

    async fn favorites(
        &self,
        category: usize,
        page: u64,
        last_id: Option<String>,
    ) -> Result<GalleryList, AppError> {
        let mut query = vec![("page", page.to_string())];
        if let Some(last_id) = last_id {
            query.push(("last_id", last_id));
        }
        let envelope: ListEnvelope = self
            .get_json(&format!("/api/favorites/{category}"), &query)
            .await?;
        Ok(envelope.into())
    }

    async fn gallery_detail(&self, gid: String) -> Result<GalleryDetailPayload, AppError> {
        let envelope: DetailEnvelope = self.get_json(&format!("/api/gallery/{gid}"), &[]).await?;
        Ok(GalleryDetailPayload {
            detail: envelope.detail,
            tags: envelope.tags,
            preview_urls: envelope.preview_urls,
            comments: envelope.comments,
            api_key: envelope.api_key,
        })
    }

    async fn contents(&self, gid: String, page: u64) -> Result<GalleryContents, AppError> {
        let query = vec![("page", page.to_string())];
        let envelope: ContentsEnvelope = self
            .get_json(&format!("/api/gallery/{gid}/contents"), &query)
            .await?;
        Ok(GalleryContents {
            page: PageNumber {
                current: envelope.current,
                maximum: envelope.maximum,
            },
            contents: envelope.contents,
        })
    }

    async fn rate_gallery(
        &self,
        gid: String,
        token: String,
        api_key: String,
        rating: u32,
    ) -> Result<(), AppError> {
        self.post_json(
            &format!("/api/gallery/{gid}/rating"),
            json!({ "token": token, "api_key": api_key, "rating": rating }),
        )
        .await
    }

    async fn favor_gallery(
        &self,
        gid: String,
        token: String,
        category: usize,
    ) -> Result<(), AppError> {
        self.post_json(
            &format!("/api/gallery/{gid}/favorite"),
            json!({ "token": token, "category": category }),
        )
        .await
    }

    async fn unfavor_gallery(&self, gid: String) -> Result<(), AppError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %gid, "gallery api delete favorite");
        self.http
            .delete(self.url(&format!("/api/gallery/{gid}/favorite")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn post_comment(&self, gid: String, content: String) -> Result<(), AppError> {
        self.post_json(
            &format!("/api/gallery/{gid}/comments"),
            json!({ "content": content }),
        )
        .await
    }

    async fn edit_comment(
        &self,
        gid: String,
        comment_id: String,
        content: String,
    ) -> Result<(), AppError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %gid, %comment_id, "gallery api edit comment");
        self.http
            .put(self.url(&format!("/api/gallery/{gid}/comments/{comment_id}")))
            .json(&json!({ "content": content }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn vote_comment(
        &self,
        gid: String,
        comment_id: String,
        vote: i32,
    ) -> Result<(), AppError> {
        self.post_json(
            &format!("/api/gallery/{gid}/comments/{comment_id}/votes"),
            json!({ "vote": vote }),
        )
        .await
    }

    async fn vote_tag(
        &self,
        gid: String,
        token: String,
        api_key: String,
        tag: String,
        vote: i32,
    ) -> Result<(), AppError> {
        self.post_json(
            &format!("/api/gallery/{gid}/tags/votes"),
            json!({ "token": token, "api_key": api_key, "tag": tag, "vote": vote }),
        )
        .await
    }

    async fn request_archive(&self, gid: String, resolution: String) -> Result<String, AppError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %gid, %resolution, "gallery api archive request");
        let response = self
            .http
            .post(self.url(&format!("/api/gallery/{gid}/archive")))
            .json(&json!({ "resolution": resolution }))
            .send()
            .await?
            .error_for_status()?;
        let envelope: MessageEnvelope = response.json().await?;
        Ok(envelope.message)
    }
}
