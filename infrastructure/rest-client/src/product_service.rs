use async_trait::async_trait;
use reqwest::Response;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use business::domain::errors::ServiceError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::service::ProductService;
use business::domain::product::value_objects::ProductId;

use crate::client::ApiClient;
use crate::dto::{ProductDto, ProductListResponse, ProductResponse};

/// Product service backed by the remote REST collection.
///
/// Create and update both send `multipart/form-data`; the `image` part is
/// only attached when the draft carries a handle.
pub struct ProductServiceHttp {
    client: ApiClient,
}

impl ProductServiceHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    async fn multipart(draft: &ProductDraft) -> Result<Form, ServiceError> {
        let mut form = Form::new()
            .text("name", draft.name.clone())
            .text("color", draft.color.clone())
            .text("price", draft.price.clone())
            .text("description", draft.description.clone());

        if let Some(handle) = &draft.image {
            let bytes = tokio::fs::read(handle.path()).await.map_err(|e| {
                ServiceError::image_unreadable(format!("{}: {}", handle.path().display(), e))
            })?;
            form = form.part("image", Part::bytes(bytes).file_name(handle.file_name()));
        }

        Ok(form)
    }

    fn check(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::status(status.as_u16()));
        }
        Ok(response)
    }
}

fn network(error: reqwest::Error) -> ServiceError {
    ServiceError::network(error.to_string())
}

fn decode(error: reqwest::Error) -> ServiceError {
    ServiceError::decode(error.to_string())
}

#[async_trait]
impl ProductService for ProductServiceHttp {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let url = self.client.collection_url()?;
        debug!(%url, "GET product list");

        let response = self.client.client.get(url).send().await.map_err(network)?;
        let body: ProductListResponse = Self::check(response)?.json().await.map_err(decode)?;

        Ok(body.user.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, ServiceError> {
        let url = self.client.item_url(id)?;
        debug!(%url, "GET product");

        let response = self.client.client.get(url).send().await.map_err(network)?;
        let body: ProductResponse = Self::check(response)?.json().await.map_err(decode)?;

        Ok(body.user.into_domain())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<(), ServiceError> {
        let url = self.client.collection_url()?;
        let form = Self::multipart(draft).await?;
        debug!(%url, with_image = draft.image.is_some(), "POST product");

        let response = self
            .client
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(network)?;
        Self::check(response)?;
        Ok(())
    }

    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), ServiceError> {
        let url = self.client.item_url(id)?;
        let form = Self::multipart(draft).await?;
        debug!(%url, with_image = draft.image.is_some(), "PATCH product");

        let response = self
            .client
            .client
            .patch(url)
            .multipart(form)
            .send()
            .await
            .map_err(network)?;
        Self::check(response)?;
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ServiceError> {
        let url = self.client.item_url(id)?;
        debug!(%url, "DELETE product");

        let response = self
            .client
            .client
            .delete(url)
            .send()
            .await
            .map_err(network)?;
        Self::check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::ImageHandle;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use url::Url;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Pen".to_string(),
            color: "Blue".to_string(),
            price: "2".to_string(),
            description: "Ballpoint".to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn should_fail_with_image_unreadable_when_file_is_missing() {
        let draft = ProductDraft {
            image: Some(ImageHandle::new("/definitely/not/here.png")),
            ..draft()
        };

        let result = ProductServiceHttp::multipart(&draft).await;

        assert!(matches!(result, Err(ServiceError::ImageUnreadable(_))));
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let head = text[..head_end].to_ascii_lowercase();
        let body_len = raw.len() - (head_end + 4);
        match head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
        {
            Some(len) => len.trim().parse::<usize>().map_or(true, |len| body_len >= len),
            None if head.contains("transfer-encoding: chunked") => text.ends_with("0\r\n\r\n"),
            None => true,
        }
    }

    /// Accepts one connection, answers 200 and hands back the raw request.
    async fn capture_one_request() -> (ApiClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 4096];
            while !request_complete(&raw) {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..read]);
            }
            socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                .await
                .unwrap();
            String::from_utf8_lossy(&raw).into_owned()
        });
        let client = ApiClient::new(
            Url::parse(&format!("http://{}", addr)).unwrap(),
            Duration::from_secs(5),
        );
        (client, handle)
    }

    fn assert_text_parts(request: &str) {
        assert!(request.to_ascii_lowercase().contains("content-type: multipart/form-data"));
        for (name, value) in [
            ("name", "Pen"),
            ("color", "Blue"),
            ("price", "2"),
            ("description", "Ballpoint"),
        ] {
            assert!(request.contains(&format!("name=\"{}\"", name)), "missing part {}", name);
            assert!(request.contains(value));
        }
    }

    #[tokio::test]
    async fn should_patch_multipart_without_image_part_when_no_handle() {
        let (client, captured) = capture_one_request().await;
        let service = ProductServiceHttp::new(client);

        service
            .update(&ProductId::new("pen-1"), &draft())
            .await
            .unwrap();

        let request = captured.await.unwrap();
        assert!(request.starts_with("PATCH /api/array/pen-1 HTTP/1.1"));
        assert_text_parts(&request);
        assert!(!request.contains("name=\"image\""));
    }

    #[tokio::test]
    async fn should_patch_multipart_with_image_part_when_handle_is_set() {
        let path = std::env::temp_dir().join(format!("catalog-upload-{}.png", std::process::id()));
        std::fs::write(&path, b"fake-png-bytes").unwrap();
        let (client, captured) = capture_one_request().await;
        let service = ProductServiceHttp::new(client);
        let draft = ProductDraft {
            image: Some(ImageHandle::new(path.clone())),
            ..draft()
        };

        let result = service.update(&ProductId::new("pen-1"), &draft).await;
        std::fs::remove_file(&path).ok();
        result.unwrap();

        let request = captured.await.unwrap();
        assert!(request.starts_with("PATCH /api/array/pen-1 HTTP/1.1"));
        assert_text_parts(&request);
        assert!(request.contains("name=\"image\""));
        assert!(request.contains(&format!(
            "filename=\"catalog-upload-{}.png\"",
            std::process::id()
        )));
        assert!(request.contains("fake-png-bytes"));
    }

    #[tokio::test]
    async fn should_post_multipart_to_collection_on_create() {
        let (client, captured) = capture_one_request().await;
        let service = ProductServiceHttp::new(client);

        service.create(&draft()).await.unwrap();

        let request = captured.await.unwrap();
        assert!(request.starts_with("POST /api/array/ HTTP/1.1"));
        assert_text_parts(&request);
        assert!(!request.contains("name=\"image\""));
    }

    #[tokio::test]
    async fn should_report_network_failure_when_service_is_unreachable() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = ApiClient::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            Duration::from_millis(500),
        );
        let service = ProductServiceHttp::new(client);

        let result = service.list().await;

        assert!(matches!(result, Err(ServiceError::Network(_))));
    }
}
