//! Serializes a laid-out `Document` to PDF bytes with `lopdf`.
//!
//! One content stream per page, one shared resource dictionary carrying the three
//! standard Times fonts, and `/Link` annotations with `/URI` actions.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, text_string, Dictionary, Object, Stream, StringFormat};
use tracing::debug;

use crate::layout::cursor::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::font_metrics::FontVariant;
use crate::render::document::{Document, DrawOp, LinkAnnotation, Page, Rgb};
use crate::render::encoding::to_win_ansi;
use crate::render::RenderError;

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Metadata written to the `/Info` dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
}

pub fn write_pdf(document: &Document, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
    let mut pdf = lopdf::Document::with_version(PDF_VERSION);
    let pages_id = pdf.new_object_id();

    let mut fonts = Dictionary::new();
    for font in FontVariant::ALL {
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = pdf.add_object(dictionary! { "Font" => fonts });

    let mut kids = Vec::with_capacity(document.page_count());
    for page in document.pages() {
        let content = page_content(page)?
            .encode()
            .map_err(|e| RenderError::Serialize(e.to_string()))?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        if !page.annotations().is_empty() {
            let mut annots = Vec::with_capacity(page.annotations().len());
            for annotation in page.annotations() {
                annots.push(Object::Reference(pdf.add_object(link_annotation(annotation))));
            }
            page_dict.set("Annots", annots);
        }
        kids.push(Object::Reference(pdf.add_object(page_dict)));
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = pdf.add_object(info_dictionary(info));
    pdf.trailer.set("Root", catalog_id);
    pdf.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)
        .map_err(|e| RenderError::Serialize(e.to_string()))?;
    debug!(pages = page_count, bytes = buffer.len(), "serialized PDF");
    Ok(buffer)
}

fn page_content(page: &Page) -> Result<Content, RenderError> {
    let mut operations = Vec::new();
    for op in page.ops() {
        match op {
            DrawOp::Text(run) => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(run.font.resource_name().as_bytes().to_vec()),
                        run.size.into(),
                    ],
                ));
                operations.push(color_op("rg", run.color));
                operations.push(Operation::new("Td", vec![run.x.into(), run.y.into()]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(to_win_ansi(&run.text)?, StringFormat::Literal)],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawOp::Rule(rule) => {
                operations.push(Operation::new("q", vec![]));
                operations.push(Operation::new("w", vec![rule.thickness.into()]));
                operations.push(color_op("RG", rule.color));
                operations.push(Operation::new("m", vec![rule.from.0.into(), rule.from.1.into()]));
                operations.push(Operation::new("l", vec![rule.to.0.into(), rule.to.1.into()]));
                operations.push(Operation::new("S", vec![]));
                operations.push(Operation::new("Q", vec![]));
            }
        }
    }
    Ok(Content { operations })
}

fn color_op(operator: &str, color: Rgb) -> Operation {
    Operation::new(operator, vec![color.r.into(), color.g.into(), color.b.into()])
}

fn link_annotation(annotation: &LinkAnnotation) -> Dictionary {
    let rect = annotation.rect;
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![rect.x0.into(), rect.y0.into(), rect.x1.into(), rect.y1.into()],
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::String(annotation.target.as_bytes().to_vec(), StringFormat::Literal),
        },
    }
}

/// Metadata strings are text strings (PDFDocEncoding or UTF-16BE), not font-encoded
/// bytes, so any name is representable here.
fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let created = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
    dictionary! {
        "Title" => text_string(&info.title),
        "Author" => text_string(&info.author),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(created),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
