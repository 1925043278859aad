use resbridge::Codec;
use resbridge::formats::UTF8_BOM;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Reads an output file, checking and stripping the byte-order mark.
fn read_output(path: &Path) -> String {
    let bytes = fs::read(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    assert!(
        bytes.starts_with(UTF8_BOM),
        "{} does not start with a BOM",
        path.display()
    );
    String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap()
}

fn convert(res: &Path, out: &Path, report: &Path) -> Codec {
    let codec = Codec::read_dir(res).unwrap();
    codec.write_resources(out).unwrap();
    codec.write_report(report).unwrap();
    codec
}

#[test]
fn test_greeting_with_placeholder() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "res/values/strings.xml",
        r#"<resources><string name="greeting">Hi %s</string></resources>"#,
    );
    write(
        root,
        "res/values-fr/strings.xml",
        r#"<resources><string name="greeting">Salut %s</string></resources>"#,
    );

    convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));

    assert_eq!(
        read_output(&root.join("out/Base.lproj/Localizable.strings")),
        "\"greeting\" = \"Hi %@\";\n"
    );
    assert_eq!(
        read_output(&root.join("out/fr.lproj/Localizable.strings")),
        "\"greeting\" = \"Salut %@\";\n"
    );
    assert_eq!(
        read_output(&root.join("report.csv")),
        "ID,Base,fr\ngreeting,\"Hi %s\",\"Salut %s\"\n"
    );
}

#[test]
fn test_plural_falls_back_to_base_stringsdict() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "res/values/strings.xml",
        r#"<resources>
    <plurals name="songs">
        <item quantity="one">%1$,d song</item>
        <item quantity="other">%1$,d songs</item>
    </plurals>
</resources>"#,
    );
    write(
        root,
        "res/values-fr/strings.xml",
        r#"<resources><string name="title">Titre</string></resources>"#,
    );

    convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));

    let fr = read_output(&root.join("out/fr.lproj/Localizable.stringsdict"));
    assert!(fr.contains("<key>songs</key>"));
    assert!(fr.contains("        <key>one</key>\n        <string>%d song</string>\n"));
    assert!(fr.contains("        <key>other</key>\n        <string>%d songs</string>\n"));
    assert_eq!(
        fr,
        read_output(&root.join("out/Base.lproj/Localizable.stringsdict"))
    );

    let report = read_output(&root.join("report.csv"));
    assert!(report.contains("songs.one,\"%1$,d song\",\"%1$,d song\"\n"));
    assert!(report.contains("songs.other,\"%1$,d songs\",\"%1$,d songs\"\n"));
}

#[test]
fn test_taiwan_and_hong_kong_share_hant() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "res/values/strings.xml",
        r#"<resources><string name="ok">OK</string></resources>"#,
    );
    write(
        root,
        "res/values-zh-rTW/strings.xml",
        r#"<resources><string name="ok">好的 TW</string></resources>"#,
    );
    write(
        root,
        "res/values-zh-rHK/strings.xml",
        r#"<resources><string name="ok">好的 HK</string></resources>"#,
    );
    write(
        root,
        "res/values-zh-rCN/strings.xml",
        r#"<resources><string name="ok">好的</string></resources>"#,
    );

    let codec = convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));

    assert_eq!(
        codec.table().locales().collect::<Vec<_>>(),
        ["Base", "zh-Hans", "zh-Hant"]
    );
    assert_eq!(
        read_output(&root.join("out/zh-Hant.lproj/Localizable.strings")),
        "\"ok\" = \"好的 TW\";\n"
    );
    assert!(root.join("out/zh-Hans.lproj/Localizable.strings").exists());
    assert!(!root.join("out/zh-HK.lproj").exists());
}

#[test]
fn test_report_escapes_quotes_and_keeps_array_order() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "res/values/strings.xml",
        r#"<resources>
    <string name="quote">He said "hi"</string>
    <string-array name="planets">
        <item>Venus</item>
        <item>Earth</item>
        <item>Mars</item>
    </string-array>
</resources>"#,
    );
    write(
        root,
        "res/values-en/strings.xml",
        r#"<resources>
    <string-array name="planets">
        <item>Venus</item>
        <item>Earth</item>
    </string-array>
</resources>"#,
    );

    convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));

    let report = read_output(&root.join("report.csv"));
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "ID,Base,en",
            r#"quote,"He said ""hi""","He said ""hi""""#,
            r#"planets.1,"Venus","Venus""#,
            r#"planets.2,"Earth","Earth""#,
            r#"planets.3,"Mars","#,
        ]
    );

    assert_eq!(
        read_output(&root.join("out/Base.lproj/LocalizableArray.strings")),
        "\"planets\" = (\n    \"Venus\",\n    \"Earth\",\n    \"Mars\",\n);\n\n"
    );
    assert_eq!(
        read_output(&root.join("out/Base.lproj/Localizable.strings")),
        "\"quote\" = \"He said \\\"hi\\\"\";\n"
    );
}

#[test]
fn test_string_reference_resolved_per_locale() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "res/values/strings.xml",
        r#"<resources>
    <string name="app_name">Acme</string>
    <string name="title">@string/app_name</string>
</resources>"#,
    );
    write(
        root,
        "res/values-de/strings.xml",
        r#"<resources><string name="app_name">Acme DE</string></resources>"#,
    );

    convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));

    let de = read_output(&root.join("out/de.lproj/Localizable.strings"));
    assert_eq!(
        de,
        "\"app_name\" = \"Acme DE\";\n\"title\" = \"Acme DE\";\n"
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "res/values/strings.xml",
        r#"<resources>
    <string name="a">A %s</string>
    <string-array name="arr"><item>x</item></string-array>
    <plurals name="p"><item quantity="other">%d things</item></plurals>
</resources>"#,
    );
    write(
        root,
        "res/values-pt-rBR/strings.xml",
        r#"<resources><string name="a">B %s</string></resources>"#,
    );

    let files = [
        "out/Base.lproj/Localizable.strings",
        "out/Base.lproj/LocalizableArray.strings",
        "out/Base.lproj/Localizable.stringsdict",
        "out/pt-BR.lproj/Localizable.strings",
        "out/pt-BR.lproj/LocalizableArray.strings",
        "out/pt-BR.lproj/Localizable.stringsdict",
        "report.csv",
    ];

    convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));
    let first: Vec<Vec<u8>> = files.iter().map(|f| fs::read(root.join(f)).unwrap()).collect();

    convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));
    let second: Vec<Vec<u8>> = files.iter().map(|f| fs::read(root.join(f)).unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn test_untranslatable_values_are_dropped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "res/values/strings.xml",
        r#"<resources>
    <string name="brand" translatable="false">Acme</string>
    <string name="hello">Hello</string>
</resources>"#,
    );

    convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));

    assert_eq!(
        read_output(&root.join("out/Base.lproj/Localizable.strings")),
        "\"hello\" = \"Hello\";\n"
    );
    assert!(!read_output(&root.join("report.csv")).contains("brand"));
}

#[test]
fn test_empty_resource_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("res")).unwrap();

    let codec = convert(&root.join("res"), &root.join("out"), &root.join("report.csv"));

    assert!(codec.table().is_empty());
    assert_eq!(read_output(&root.join("report.csv")), "ID\n");
}
