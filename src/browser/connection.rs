use crate::error::{AppResult, BrowserError};
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 连接到浏览器并定位对话页面
///
/// 优先复用 URL 匹配 `target_url` 前缀的已打开标签页，
/// 找不到时创建新页面并导航过去
pub async fn connect_to_browser_and_page(
    port: u16,
    target_url: &str,
) -> AppResult<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) =
        Browser::connect(&browser_url)
            .await
            .map_err(|e| BrowserError::ConnectionFailed {
                port,
                source: Box::new(e),
            })?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    // 查找已打开的对话标签页
    for p in pages.iter() {
        if let Ok(Some(url)) = p.url().await {
            debug!("检查页面 URL: {}", url);
            if url.starts_with(target_url) {
                info!("✓ 找到目标页面: {}", url);
                return Ok((browser, p.clone()));
            }
        }
    }

    debug!("未找到匹配的页面，将创建新页面");
    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建新页面失败: {}", e);
        BrowserError::PageCreationFailed {
            source: Box::new(e),
        }
    })?;
    page.goto(target_url).await?;
    info!("已导航到: {}", target_url);

    Ok((browser, page))
}
