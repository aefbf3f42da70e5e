/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use wordswap::file_utils::FileManager;
use crate::common::{self, rule};

#[test]
fn test_generateOutputPath_shouldInsertSuffixBeforeExtension() {
    let path = FileManager::generate_output_path("/docs/notes.txt", "/out", "translated");
    assert_eq!(path, Path::new("/out/notes.translated.txt"));

    let no_ext = FileManager::generate_output_path("/docs/README", "/out", "translated");
    assert_eq!(no_ext, Path::new("/out/README.translated"));
}

#[test]
fn test_isGeneratedOutput_shouldDetectSuffix() {
    assert!(FileManager::is_generated_output("notes.translated.txt", "translated"));
    assert!(!FileManager::is_generated_output("notes.txt", "translated"));
    assert!(!FileManager::is_generated_output("translated.txt", "translated"));
}

#[test]
fn test_findFiles_shouldMatchExtensionCaseInsensitively() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.txt", "a")?;
    common::create_test_file(temp_dir.path(), "nested/b.TXT", "b")?;
    common::create_test_file(temp_dir.path(), "c.md", "c")?;

    let files = FileManager::find_files(temp_dir.path(), ".txt")?;
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap().eq_ignore_ascii_case("txt")));
    Ok(())
}

#[test]
fn test_writeToFile_shouldCreateParentDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deep/dir/out.txt");

    FileManager::write_to_file(&path, "content")?;
    assert_eq!(FileManager::read_to_string(&path)?, "content");
    Ok(())
}

#[test]
fn test_loadRules_shouldKeepFileOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "rules.json",
        r#"[{"oldWord": "a", "newWord": "b"}, {"oldWord": "b", "newWord": "c"}]"#,
    )?;

    let rules = FileManager::load_rules(&path)?;
    assert_eq!(rules, vec![rule("a", "b"), rule("b", "c")]);
    Ok(())
}

#[test]
fn test_loadRules_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "rules.json", r#"{"oldWord": "a"}"#)?;
    assert!(FileManager::load_rules(&path).is_err());
    Ok(())
}

#[test]
fn test_parseRuleArg_shouldSplitOnFirstEquals() -> Result<()> {
    assert_eq!(FileManager::parse_rule_arg("hello=hi")?, rule("hello", "hi"));
    assert_eq!(FileManager::parse_rule_arg("x=a=b")?, rule("x", "a=b"));
    assert_eq!(FileManager::parse_rule_arg("big cat=lion")?, rule("big cat", "lion"));
    Ok(())
}

#[test]
fn test_parseRuleArg_withMissingSide_shouldFail() {
    assert!(FileManager::parse_rule_arg("hello").is_err());
    assert!(FileManager::parse_rule_arg("=hi").is_err());
    assert!(FileManager::parse_rule_arg("hello=").is_err());
}

#[test]
fn test_collectRules_shouldPutRulesFileBeforeArguments() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "rules.json",
        r#"[{"oldWord": "a", "newWord": "b"}, {"oldWord": "c", "newWord": "d"}]"#,
    )?;

    let rules = FileManager::collect_rules(Some(&path), &["e=f", "g=h"])?;
    assert_eq!(rules, vec![rule("a", "b"), rule("c", "d"), rule("e", "f"), rule("g", "h")]);
    Ok(())
}

#[test]
fn test_collectRules_withNothingGiven_shouldBeEmpty() -> Result<()> {
    let rules = FileManager::collect_rules::<String>(None, &[])?;
    assert!(rules.is_empty());
    Ok(())
}

#[test]
fn test_collectRules_withInvalidArgument_shouldFail() {
    assert!(FileManager::collect_rules(None, &["a=b", "broken"]).is_err());
}

#[test]
fn test_readContent_shouldPreferTextThenFileThenReader() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "input.txt", "from file")?;

    let text = FileManager::read_content(Some("inline"), Some(&path), "from stdin".as_bytes())?;
    assert_eq!(text, "inline");

    let file = FileManager::read_content(None, Some(&path), "from stdin".as_bytes())?;
    assert_eq!(file, "from file");

    let stdin = FileManager::read_content(None, None, "from stdin".as_bytes())?;
    assert_eq!(stdin, "from stdin");
    Ok(())
}

#[test]
fn test_readContent_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.txt");
    assert!(FileManager::read_content(None, Some(&missing), "unused".as_bytes()).is_err());
    Ok(())
}
