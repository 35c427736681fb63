use async_trait::async_trait;

/// Append-only sink for anonymous sign-off lines.
#[async_trait]
pub trait SignOffLog: Send + Sync {
    async fn append(&self, line: &str) -> anyhow::Result<()>;
}
