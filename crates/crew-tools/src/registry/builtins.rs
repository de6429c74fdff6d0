//! Built-in tool registrations

use super::ToolRegistration;
use crate::builtin::{code, custom, data, document, media, web};

/// Number of built-in tool types.
pub const BUILTIN_COUNT: usize = 25;

/// Every built-in tool type, grouped by category.
pub fn builtin_registrations() -> Vec<ToolRegistration> {
    vec![
        // Web
        web::serper_dev_registration(),
        web::exa_search_registration(),
        web::website_search_registration(),
        web::scrape_website_registration(),
        web::selenium_scraping_registration(),
        web::scrape_element_registration(),
        // Media
        media::youtube_video_search_registration(),
        media::youtube_channel_search_registration(),
        // Documents
        document::file_read_registration(),
        document::directory_search_registration(),
        document::directory_read_registration(),
        document::txt_search_registration(),
        document::csv_search_registration(),
        document::docx_search_registration(),
        document::json_search_registration(),
        document::mdx_search_registration(),
        document::pdf_search_registration(),
        // Code
        code::code_docs_search_registration(),
        code::github_search_registration(),
        code::code_interpreter_registration(),
        code::custom_code_interpreter_registration(),
        // Data
        data::pg_search_registration(),
        data::yahoo_finance_news_registration(),
        // Custom
        custom::custom_api_registration(),
        custom::custom_file_write_registration(),
    ]
}
