//! Built-in document tools grouped by family.
//!
//! ```rust
//! use pschema::builtin;
//!
//! let catalog = builtin::catalog().expect("built-in tools are well formed");
//! let rotate = catalog.require("rotate-pages").expect("rotate is built in");
//! assert_eq!(rotate.endpoint, "/api/edit/rotate");
//! ```

use crate::{
    Choice, ExtraRule, FileTypePattern, NumericRange, OptionDefinition, SchemaError, ToolCatalog,
    ToolCategory, ToolDefinition,
};

const PAGE_LIST_PLACEHOLDER: &str = "1,3,5 or 1-3,5";

pub fn catalog() -> Result<ToolCatalog, SchemaError> {
    let mut catalog = ToolCatalog::new();
    catalog.register_all(organize_tools())?;
    catalog.register_all(edit_tools())?;
    catalog.register_all(security_tools())?;
    catalog.register_all(convert_tools())?;
    Ok(catalog)
}

pub fn organize_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("merge", ToolCategory::Organize, "/api/organize/merge")
            .with_title("Merge PDFs")
            .with_description("Combine multiple PDF files into one document")
            .accepting_multiple(10),
        ToolDefinition::new("split", ToolCategory::Organize, "/api/organize/split")
            .with_title("Split PDF")
            .with_description("Split PDF into separate pages or ranges")
            .with_option(
                OptionDefinition::select(
                    "splitType",
                    "Split Type",
                    vec![
                        Choice::new("pages", "Split into individual pages"),
                        Choice::new("ranges", "Split by custom ranges"),
                    ],
                )
                .with_default("pages"),
            )
            .with_option(
                OptionDefinition::short_text("ranges", "Page Ranges")
                    .visible_when("splitType", "ranges")
                    .with_placeholder(r#"[{"start":1,"end":3},{"start":5,"end":7}]"#),
            ),
        ToolDefinition::new("remove-pages", ToolCategory::Organize, "/api/organize/remove-pages")
            .with_title("Remove Pages")
            .with_description("Remove specific pages from PDF")
            .with_option(
                OptionDefinition::short_text("pagesToRemove", "Pages to Remove")
                    .required()
                    .with_placeholder(PAGE_LIST_PLACEHOLDER),
            ),
        ToolDefinition::new(
            "extract-pages",
            ToolCategory::Organize,
            "/api/organize/extract-pages",
        )
        .with_title("Extract Pages")
        .with_description("Extract specific pages from PDF into a new document")
        .with_option(
            OptionDefinition::short_text("pagesToExtract", "Pages to Extract")
                .required()
                .with_placeholder(PAGE_LIST_PLACEHOLDER),
        ),
    ]
}

pub fn edit_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("rotate-pages", ToolCategory::Edit, "/api/edit/rotate")
            .with_title("Rotate Pages")
            .with_description("Rotate PDF pages by 90, 180, or 270 degrees")
            .with_option(
                OptionDefinition::select(
                    "rotation",
                    "Rotation Angle",
                    vec![
                        Choice::new("90", "90° Clockwise"),
                        Choice::new("180", "180°"),
                        Choice::new("270", "270° Clockwise"),
                        Choice::new("-90", "90° Counter-clockwise"),
                    ],
                )
                .with_default("90"),
            )
            .with_option(
                OptionDefinition::short_text("pages", "Pages to Rotate")
                    .with_default("all")
                    .with_placeholder("all or 1,3,5 or 1-3,5"),
            ),
        ToolDefinition::new("watermark", ToolCategory::Edit, "/api/edit/watermark")
            .with_title("Add Watermark")
            .with_description("Add text watermark to PDF pages")
            .with_option(
                OptionDefinition::short_text("text", "Watermark Text")
                    .required()
                    .with_default("CONFIDENTIAL"),
            )
            .with_option(
                OptionDefinition::slider(
                    "opacity",
                    "Opacity (0.1 - 1.0)",
                    NumericRange::bounded(0.1, 1.0).with_step(0.1),
                )
                .with_default(0.3),
            )
            .with_option(
                OptionDefinition::number("fontSize", "Font Size", NumericRange::bounded(12.0, 100.0))
                    .with_default(50),
            )
            .with_option(
                OptionDefinition::short_text("color", "Color")
                    .with_default("#999999")
                    .with_placeholder("#999999"),
            )
            .with_option(
                OptionDefinition::select(
                    "position",
                    "Position",
                    vec![
                        Choice::new("center", "Center"),
                        Choice::new("top-left", "Top Left"),
                        Choice::new("top-right", "Top Right"),
                        Choice::new("bottom-left", "Bottom Left"),
                        Choice::new("bottom-right", "Bottom Right"),
                    ],
                )
                .with_default("center"),
            ),
        ToolDefinition::new("page-numbers", ToolCategory::Edit, "/api/edit/page-numbers")
            .with_title("Add Page Numbers")
            .with_description("Add page numbers to PDF pages")
            .with_option(
                OptionDefinition::select(
                    "position",
                    "Position",
                    vec![
                        Choice::new("bottom-center", "Bottom Center"),
                        Choice::new("bottom-left", "Bottom Left"),
                        Choice::new("bottom-right", "Bottom Right"),
                        Choice::new("top-center", "Top Center"),
                        Choice::new("top-left", "Top Left"),
                        Choice::new("top-right", "Top Right"),
                    ],
                )
                .with_default("bottom-center"),
            )
            .with_option(
                OptionDefinition::number("fontSize", "Font Size", NumericRange::bounded(8.0, 24.0))
                    .with_default(12),
            )
            .with_option(
                OptionDefinition::short_text("color", "Color")
                    .with_default("#000000")
                    .with_placeholder("#000000"),
            )
            .with_option(
                OptionDefinition::number(
                    "startPage",
                    "Start Page Number",
                    NumericRange::at_least(1.0),
                )
                .with_default(1),
            )
            .with_option(
                OptionDefinition::select(
                    "format",
                    "Format",
                    vec![
                        Choice::new("{page}", "Page number only"),
                        Choice::new("Page {page}", "Page X"),
                        Choice::new("{page} of {total}", "X of Y"),
                        Choice::new("- {page} -", "- X -"),
                    ],
                )
                .with_default("{page}"),
            ),
        ToolDefinition::new("compress", ToolCategory::Edit, "/api/edit/compress")
            .with_title("Compress PDF")
            .with_description("Reduce PDF file size"),
    ]
}

pub fn security_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("protect", ToolCategory::Security, "/api/security/protect")
            .with_title("Protect PDF")
            .with_description("Add password protection to your PDF files")
            .with_option(
                OptionDefinition::secret_text("password", "Password")
                    .required()
                    .with_placeholder("Enter password (min 4 characters)"),
            )
            .with_option(
                OptionDefinition::select(
                    "permissions",
                    "Permissions",
                    vec![
                        Choice::new("full", "Full access (print, copy, edit)"),
                        Choice::new("print", "Print only"),
                        Choice::new("view", "View only"),
                    ],
                )
                .with_default("full"),
            )
            .with_rule(
                ExtraRule::min_length("password", 4)
                    .with_message("Password must be at least 4 characters long"),
            ),
        ToolDefinition::new("unlock", ToolCategory::Security, "/api/security/unlock")
            .with_title("Unlock PDF")
            .with_description("Remove password protection from PDF files")
            .with_option(
                OptionDefinition::secret_text("password", "Current Password")
                    .required()
                    .with_placeholder("Enter current password"),
            ),
        ToolDefinition::new("sign", ToolCategory::Security, "/api/security/sign")
            .with_title("Digital Signature")
            .with_description("Add digital signature to PDF")
            .with_option(
                OptionDefinition::short_text("signatureName", "Signature Name")
                    .required()
                    .with_default("Digital Signature")
                    .with_placeholder("Your full name"),
            )
            .with_option(
                OptionDefinition::short_text("reason", "Reason for Signing")
                    .with_default("Document approval"),
            )
            .with_option(
                OptionDefinition::short_text("location", "Location")
                    .with_default("Digital")
                    .with_placeholder("City, Country"),
            )
            .with_option(
                OptionDefinition::short_text("contactInfo", "Contact Information")
                    .with_placeholder("Email or phone (optional)"),
            ),
        ToolDefinition::new("compare", ToolCategory::Security, "/api/security/compare")
            .with_title("Compare PDFs")
            .with_description("Compare two PDF files for differences")
            .with_max_files(2),
        ToolDefinition::new("redact", ToolCategory::Security, "/api/security/redact")
            .with_title("Redact Content")
            .with_description("Black out sensitive information in PDF")
            .with_option(
                OptionDefinition::long_text("areas", "Redaction Areas (JSON format)")
                    .required()
                    .with_placeholder(r#"[{"x":50,"y":100,"width":200,"height":20,"page":1}]"#)
                    .with_help_text(
                        "Specify areas to redact as JSON array with x, y, width, height coordinates",
                    ),
            ),
    ]
}

pub fn convert_tools() -> Vec<ToolDefinition> {
    let images = || {
        vec![
            FileTypePattern::new("image/jpeg", [".jpg", ".jpeg"]),
            FileTypePattern::new("image/jpg", [".jpg"]),
            FileTypePattern::new("image/png", [".png"]),
        ]
    };

    let converter = |id: &str, title: &str, description: &str, accepted: Vec<FileTypePattern>| {
        ToolDefinition::new(id, ToolCategory::Convert, format!("/api/convert/{id}"))
            .with_title(title)
            .with_description(description)
            .with_accepted_types(accepted)
    };

    vec![
        converter(
            "image-to-pdf",
            "Image to PDF",
            "Convert JPG, PNG images to PDF format",
            images(),
        ),
        converter(
            "word-to-pdf",
            "Word to PDF",
            "Convert Word documents (.docx) to PDF",
            vec![FileTypePattern::new(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                [".docx"],
            )],
        ),
        converter(
            "excel-to-pdf",
            "Excel to PDF",
            "Convert Excel spreadsheets (.xlsx) to PDF",
            vec![FileTypePattern::new(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                [".xlsx"],
            )],
        ),
        converter(
            "html-to-pdf",
            "HTML to PDF",
            "Convert HTML files to PDF format",
            vec![FileTypePattern::new("text/html", [".html", ".htm"])],
        ),
        converter(
            "pdf-to-jpg",
            "PDF to JPG",
            "Convert PDF pages to JPG images",
            vec![FileTypePattern::pdf()],
        ),
        converter(
            "image-to-text",
            "Image to Text",
            "Extract text from images using OCR",
            images(),
        ),
        converter(
            "pdf-to-word",
            "PDF to Word",
            "Convert PDF files to Word documents",
            vec![FileTypePattern::pdf()],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilePolicy, OptionValue};

    #[test]
    fn builtin_catalog_registers_every_family() {
        let catalog = catalog().expect("catalog should build");

        assert_eq!(catalog.in_category(ToolCategory::Organize).len(), 4);
        assert_eq!(catalog.in_category(ToolCategory::Edit).len(), 4);
        assert_eq!(catalog.in_category(ToolCategory::Security).len(), 5);
        assert_eq!(catalog.in_category(ToolCategory::Convert).len(), 7);
    }

    #[test]
    fn file_policies_follow_tool_family() {
        let catalog = catalog().expect("catalog should build");

        let merge = catalog.require("merge").expect("merge");
        let compare = catalog.require("compare").expect("compare");
        let ocr = catalog.require("image-to-text").expect("ocr");

        assert_eq!(merge.file_policy(), FilePolicy::UpTo(10));
        assert_eq!(compare.file_policy(), FilePolicy::Exactly(2));
        assert_eq!(ocr.file_policy(), FilePolicy::Single);
        assert_eq!(ocr.endpoint, "/api/convert/image-to-text");
    }

    #[test]
    fn rotate_defaults_match_form_expectations() {
        let catalog = catalog().expect("catalog should build");
        let rotate = catalog.require("rotate-pages").expect("rotate");

        let rotation = rotate.option("rotation").expect("rotation option");
        let pages = rotate.option("pages").expect("pages option");
        assert_eq!(rotation.default, Some(OptionValue::from("90")));
        assert_eq!(pages.default, Some(OptionValue::from("all")));
    }
}
