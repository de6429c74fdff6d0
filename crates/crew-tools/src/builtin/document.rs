//! File, directory and document-format tools

use crew_meta::ParamSpec;

use super::targeted;
use crate::registry::{ToolCategory, ToolRegistration};

pub fn file_read_registration() -> ToolRegistration {
    targeted(
        "FileReadTool",
        "File Read",
        ToolCategory::Document,
        "A tool that can be used to read a file's content.",
        "file_path",
        ParamSpec::optional(),
    )
}

pub fn directory_search_registration() -> ToolRegistration {
    targeted(
        "DirectorySearchTool",
        "Directory Search",
        ToolCategory::Document,
        "A tool that can be used to semantic search a query from a directory's content.",
        "directory",
        ParamSpec::optional(),
    )
}

pub fn directory_read_registration() -> ToolRegistration {
    targeted(
        "DirectoryReadTool",
        "Directory Read",
        ToolCategory::Document,
        "Use the tool to list the contents of the specified directory",
        "directory_contents",
        ParamSpec::mandatory(),
    )
}

/// Semantic search over one document format.
fn format_search(
    type_name: &'static str,
    display_name: &'static str,
    description: &'static str,
    param: &'static str,
) -> ToolRegistration {
    targeted(
        type_name,
        display_name,
        ToolCategory::Document,
        description,
        param,
        ParamSpec::optional(),
    )
}

pub fn txt_search_registration() -> ToolRegistration {
    format_search(
        "TXTSearchTool",
        "TXT Search",
        "A tool that can be used to semantic search a query from a TXT's content.",
        "txt",
    )
}

pub fn csv_search_registration() -> ToolRegistration {
    format_search(
        "CSVSearchTool",
        "CSV Search",
        "A tool that can be used to semantic search a query from a CSV's content.",
        "csv",
    )
}

pub fn docx_search_registration() -> ToolRegistration {
    format_search(
        "DOCXSearchTool",
        "DOCX Search",
        "A tool that can be used to semantic search a query from a DOCX's content.",
        "docx",
    )
}

pub fn json_search_registration() -> ToolRegistration {
    format_search(
        "JSONSearchTool",
        "JSON Search",
        "A tool that can be used to semantic search a query from a JSON's content.",
        "json_path",
    )
}

pub fn mdx_search_registration() -> ToolRegistration {
    format_search(
        "MDXSearchTool",
        "MDX Search",
        "A tool that can be used to semantic search a query from a MDX's content.",
        "mdx",
    )
}

pub fn pdf_search_registration() -> ToolRegistration {
    format_search(
        "PDFSearchTool",
        "PDF Search",
        "A tool that can be used to semantic search a query from a PDF's content.",
        "pdf",
    )
}
