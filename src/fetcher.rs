//! 单个检索词的页面查询
//!
//! 每次查询创建一个全新的 Page（无 cookie / 会话复用），
//! 在任何退出路径上都会关闭，防止长批次下浏览器句柄耗尽。

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chromiumoxide::{Browser, Page};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::FetchError;

/// 首个成功渲染页面的调试存档
///
/// 整个运行过程中最多写一次，用 compare-and-set 保证
/// 将来引入并发 worker 时仍然只写第一份
pub struct DebugCapture {
    path: PathBuf,
    saved: AtomicBool,
}

impl DebugCapture {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            saved: AtomicBool::new(false),
        }
    }

    /// 保存页面内容；第一次调用之后变为空操作
    pub fn save(&self, html: &str) {
        if self
            .saved
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }
        match std::fs::write(&self.path, html) {
            Ok(_) => info!("📝 调试页面已保存: {}", self.path.display()),
            Err(e) => warn!("保存调试页面失败 ({}): {}", self.path.display(), e),
        }
    }
}

/// 按检索 URL 模板拼出查询地址
pub fn build_search_url(base: &str, term: &str) -> String {
    format!("{}?query={}", base, urlencoding::encode(term))
}

/// 页面查询器
///
/// 只负责"一个词 → 渲染后的 HTML"，不认识输入文件和输出表格
pub struct Fetcher<'a> {
    browser: &'a Browser,
    debug: &'a DebugCapture,
    search_url_base: &'a str,
    navigation_timeout: Duration,
    render_settle: Duration,
}

impl<'a> Fetcher<'a> {
    pub fn new(browser: &'a Browser, config: &'a Config, debug: &'a DebugCapture) -> Self {
        Self {
            browser,
            debug,
            search_url_base: &config.search_url_base,
            navigation_timeout: Duration::from_secs(config.navigation_timeout_secs),
            render_settle: Duration::from_millis(config.render_settle_ms),
        }
    }

    /// 查询一个检索词，返回渲染后的页面 HTML
    ///
    /// 失败不重试，由调用方决定如何隔离
    pub async fn fetch(&self, term: &str) -> Result<String, FetchError> {
        let url = build_search_url(self.search_url_base, term);
        debug!("检索 URL: {}", url);

        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(FetchError::PageCreation)?;

        // 渲染结果先落地，页面再关闭，保证任何路径都不泄漏 Page
        let result = self.render(&page, &url).await;
        if let Err(e) = page.close().await {
            warn!("关闭页面失败: {}", e);
        }

        let html = result?;
        self.debug.save(&html);
        Ok(html)
    }

    async fn render(&self, page: &Page, url: &str) -> Result<String, FetchError> {
        let navigation = async {
            page.goto(url).await.map_err(|e| FetchError::Navigation {
                url: url.to_string(),
                source: e,
            })?;
            page.wait_for_navigation()
                .await
                .map_err(|e| FetchError::Navigation {
                    url: url.to_string(),
                    source: e,
                })?;
            Ok::<(), FetchError>(())
        };

        match timeout(self.navigation_timeout, navigation).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(FetchError::Timeout {
                    url: url.to_string(),
                    timeout_secs: self.navigation_timeout.as_secs(),
                })
            }
        }

        // 搜索页是前端渲染的 SPA，load 事件之后再等一段时间
        sleep(self.render_settle).await;

        page.content().await.map_err(FetchError::Content)
    }
}
