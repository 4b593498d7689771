//! Layered merge of field rows for one run.

use super::{load_base_file, FieldRow, MergedFields};
use crate::config::ProtocolDefinition;
use crate::error::Result;
use crate::fragment::decode_fragment;
use crate::template::{Renderer, TemplateContext};

/// Build the merged field mapping for `protocol`.
///
/// Layers, each replacing colliding keys:
/// 1. base file rows
/// 2. rows decoded from `fragment`
/// 3. additional line templates, in configuration order
/// 4. the host-address line template
/// 5. the username line template
///
/// Any failure aborts the whole merge.
pub fn assemble_fields(
    protocol: &ProtocolDefinition,
    fragment: Option<&str>,
    renderer: &Renderer,
    ctx: &TemplateContext,
) -> Result<MergedFields> {
    let mut fields = MergedFields::new();

    if let Some(base) = protocol.base_path() {
        tracing::debug!("loading base file {}", base.display());
        fields.merge(load_base_file(base, &protocol.file_delimiter)?);
    }

    if let Some(fragment) = fragment {
        tracing::debug!("merging URL fragment rows");
        fields.merge(decode_fragment(fragment)?);
    }

    if !protocol.additional_lines.is_empty() {
        tracing::debug!("merging {} additional lines", protocol.additional_lines.len());
    }
    let templated = protocol
        .additional_lines
        .iter()
        .chain([&protocol.host_address_line, &protocol.username_line]);
    for line in templated {
        if let Some(row) = render_line(line, renderer, ctx)? {
            fields.insert(row);
        }
    }

    Ok(fields)
}

/// Render one line template. Empty templates contribute nothing.
fn render_line(
    template: &[String],
    renderer: &Renderer,
    ctx: &TemplateContext,
) -> Result<Option<FieldRow>> {
    let cells = renderer.render_all(template, ctx)?;
    Ok(FieldRow::from_cells(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fragment::encode_fragment;
    use std::io::Write;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn row(cells: &[&str]) -> FieldRow {
        FieldRow::from_cells(strings(cells)).unwrap()
    }

    fn ctx() -> TemplateContext {
        TemplateContext {
            host_address: "desk01".into(),
            host_port: "3389".into(),
            username: "alice".into(),
            ..Default::default()
        }
    }

    fn proto() -> ProtocolDefinition {
        ProtocolDefinition {
            protocol: "rdp".into(),
            cmd: strings(&["mstsc"]),
            output_file: "/tmp/out.rdp".into(),
            file_delimiter: ":".into(),
            ..Default::default()
        }
    }

    fn values(fields: &MergedFields, key: &str) -> Vec<String> {
        fields.get(key).map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn fragment_replaces_base_row() {
        let mut base = tempfile::NamedTempFile::new().unwrap();
        base.write_all(b"K:a:b\nkeep:1\n").unwrap();
        base.flush().unwrap();

        let mut p = proto();
        p.base_file = base.path().display().to_string();
        let fragment = encode_fragment(&[row(&["K", "c"])]);

        let fields = assemble_fields(&p, Some(&fragment), &Renderer::new(), &ctx()).unwrap();
        assert_eq!(values(&fields, "K"), strings(&["c"]));
        assert_eq!(values(&fields, "keep"), strings(&["1"]));
    }

    #[test]
    fn templated_layers_in_precedence_order() {
        let mut p = proto();
        p.additional_lines = vec![
            strings(&["full address", "s", "from-additional"]),
            strings(&["server port", "i", "{{HostPort}}"]),
        ];
        p.host_address_line = strings(&["full address", "s", "{{HostAddress}}"]);
        p.username_line = strings(&["username", "s", "{{Username}}"]);
        let fragment = encode_fragment(&[row(&["username", "s", "from-fragment"])]);

        let fields = assemble_fields(&p, Some(&fragment), &Renderer::new(), &ctx()).unwrap();
        assert_eq!(values(&fields, "full address"), strings(&["s", "desk01"]));
        assert_eq!(values(&fields, "server port"), strings(&["i", "3389"]));
        assert_eq!(values(&fields, "username"), strings(&["s", "alice"]));
    }

    #[test]
    fn later_additional_line_wins() {
        let mut p = proto();
        p.additional_lines = vec![strings(&["K", "first"]), strings(&["K", "second"])];
        let fields = assemble_fields(&p, None, &Renderer::new(), &ctx()).unwrap();
        assert_eq!(values(&fields, "K"), strings(&["second"]));
    }

    #[test]
    fn empty_line_templates_are_skipped() {
        let p = proto();
        let fields = assemble_fields(&p, None, &Renderer::new(), &ctx()).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn render_failure_aborts() {
        let mut p = proto();
        p.additional_lines = vec![strings(&["ok", "1"])];
        p.host_address_line = strings(&["full address", "{{Missing}}"]);
        let err = assemble_fields(&p, None, &Renderer::new(), &ctx()).unwrap_err();
        assert!(matches!(err, Error::TemplateRender { .. }));
    }

    #[test]
    fn bad_fragment_aborts() {
        let err = assemble_fields(&proto(), Some("%%%"), &Renderer::new(), &ctx()).unwrap_err();
        assert!(matches!(err, Error::FragmentDecode { .. }));
    }

    #[test]
    fn missing_base_file_aborts() {
        let mut p = proto();
        p.base_file = "/definitely/not/here.rdp".into();
        let err = assemble_fields(&p, None, &Renderer::new(), &ctx()).unwrap_err();
        assert!(matches!(err, Error::FileIo { .. }));
    }
}
