use gemini_manager::browser::connect_to_browser_and_page;
use gemini_manager::infrastructure::JsExecutor;
use gemini_manager::orchestrator::Session;
use gemini_manager::services::ChatExtractor;
use gemini_manager::utils::logging;
use gemini_manager::Config;

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_browser_connection() {
    logging::init(true);

    let config = Config::load().expect("加载配置失败");

    let result = connect_to_browser_and_page(config.browser_debug_port, &config.chat_url).await;

    assert!(result.is_ok(), "应该能够成功连接浏览器");
}

#[tokio::test]
#[ignore]
async fn test_extract_from_live_page() {
    logging::init(true);

    let config = Config::load().expect("加载配置失败");

    let (_browser, page) =
        connect_to_browser_and_page(config.browser_debug_port, &config.chat_url)
            .await
            .expect("连接浏览器失败");
    let executor = JsExecutor::new(page);

    let extractor = ChatExtractor::new(&config.query_selector, &config.response_selector);
    let batch = extractor.extract(&executor).await.expect("提取对话失败");

    println!("提取到 {} 组对话", batch.len());
    assert!(!batch.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_save_all_end_to_end() {
    // 需要：已开调试端口的浏览器 + 对话页面；后端可以不在运行（会触发唤醒）
    logging::init(true);

    let config = Config::load().expect("加载配置失败");

    let session = Session::initialize(config).await.expect("初始化会话失败");

    session.save_all().await.expect("全量保存失败");
}
