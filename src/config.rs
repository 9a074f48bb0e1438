/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入路径：单个文件，或存放输入文件的目录
    pub input_path: String,
    /// 输出目录（不存在时自动创建）
    pub output_folder: String,
    /// 检索 URL 前缀
    pub search_url_base: String,
    /// 页面导航超时（秒）
    pub navigation_timeout_secs: u64,
    /// 页面加载后等待前端渲染的时间（毫秒）
    pub render_settle_ms: u64,
    /// 首个成功渲染页面的调试存档路径
    pub debug_html_file: String,
    /// 运行日志文件
    pub run_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "input".to_string(),
            output_folder: "output".to_string(),
            search_url_base: "https://hanja.dict.naver.com/#/search".to_string(),
            navigation_timeout_secs: 30,
            render_settle_ms: 500,
            debug_html_file: "debug.html".to_string(),
            run_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_path: std::env::var("INPUT_PATH").unwrap_or(default.input_path),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            search_url_base: std::env::var("SEARCH_URL_BASE").unwrap_or(default.search_url_base),
            navigation_timeout_secs: std::env::var("NAVIGATION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.navigation_timeout_secs),
            render_settle_ms: std::env::var("RENDER_SETTLE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.render_settle_ms),
            debug_html_file: std::env::var("DEBUG_HTML_FILE").unwrap_or(default.debug_html_file),
            run_log_file: std::env::var("RUN_LOG_FILE").unwrap_or(default.run_log_file),
        }
    }
}
