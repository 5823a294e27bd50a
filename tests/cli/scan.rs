use anyhow::Result;

use crate::CliTest;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_finds_comments_and_exits_with_failure() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "// TODO: wire up routing\nconst x = 1;\n// FIXME(sam): leaks a handle\n",
    )?;

    let output = test.command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("src/app.js"));
    assert!(out.contains("TODO"));
    assert!(out.contains("wire up routing"));
    assert!(out.contains("(sam)"));
    assert!(out.contains("2 comments found"));
    Ok(())
}

#[test]
fn test_clean_project_exits_with_success() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "const x = 1;\n")?;

    let output = test.command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No annotated comments found"));
    Ok(())
}

#[test]
fn test_exit_nicely_suppresses_failure_code() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "// TODO: x\n")?;

    let output = test.command().args(["src", "--exit-nicely"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("TODO"));
    Ok(())
}

#[test]
fn test_no_files_found_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("nothing-here").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No files found"));
    Ok(())
}

#[test]
fn test_json_reporter() -> Result<()> {
    let test = CliTest::with_file("a.js", "// TODO: first\n")?;

    let output = test.command().args(["a.js", "--reporter", "json"]).output()?;

    let items: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(items[0]["file"], "a.js");
    assert_eq!(items[0]["tag"], "TODO");
    assert_eq!(items[0]["line"], 1);
    assert_eq!(items[0]["text"], "first");
    Ok(())
}

#[test]
fn test_raw_reporter() -> Result<()> {
    let test = CliTest::with_file("a.js", "\n// FIXME: second\n")?;

    let output = test.command().args(["a.js", "--reporter", "raw"]).output()?;

    assert_eq!(stdout(&output).trim(), "a.js:2 FIXME second");
    Ok(())
}

#[test]
fn test_raw_output_ends_without_blank_line() -> Result<()> {
    let test = CliTest::with_file("a.js", "// TODO: only one\n")?;

    let output = test.command().args(["a.js", "--reporter", "raw"]).output()?;

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.ends_with('\n'));
    assert!(!out.ends_with("\n\n"));
    Ok(())
}

#[test]
fn test_markdown_reporter() -> Result<()> {
    let test = CliTest::with_file("a.js", "// TODO: first\n")?;

    let output = test
        .command()
        .args(["a.js", "--reporter", "markdown"])
        .output()?;

    let out = stdout(&output);
    assert!(out.contains("## TODOs"));
    assert!(out.contains("| a.js | 1 | first |"));
    Ok(())
}

#[test]
fn test_custom_tags_flag() -> Result<()> {
    let test = CliTest::with_file("a.js", "// REVIEW: check the math\n// TODO: also this\n")?;

    let output = test
        .command()
        .args(["a.js", "--tags", "review", "--reporter", "raw"])
        .output()?;

    let out = stdout(&output);
    assert!(out.contains("a.js:1 REVIEW check the math"));
    assert!(out.contains("a.js:2 TODO also this"));
    Ok(())
}

#[test]
fn test_ignore_flag() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "// TODO: kept\n")?;
    test.write_file("src/vendor/b.js", "// TODO: vendored\n")?;

    let output = test
        .command()
        .args(["src", "--ignore", "**/vendor/**", "--reporter", "raw"])
        .output()?;

    let out = stdout(&output);
    assert!(out.contains("kept"));
    assert!(!out.contains("vendored"));
    Ok(())
}

#[test]
fn test_inline_files_flag() -> Result<()> {
    let content = "\
<template>
  <!-- TODO: markup comment -->
</template>
<script>
// TODO: script comment
</script>
";
    let test = CliTest::with_file("app.vue", content)?;

    let output = test.command().args(["app.vue", "--reporter", "raw"]).output()?;
    assert_eq!(stdout(&output).lines().count(), 1);

    let output = test
        .command()
        .args(["app.vue", "--inline-files", "--reporter", "raw"])
        .output()?;
    assert_eq!(stdout(&output).lines().count(), 2);
    Ok(())
}

#[test]
fn test_config_file_supplies_defaults() -> Result<()> {
    let test = CliTest::with_file("a.js", "// HACK: config tag\n")?;
    test.write_file(
        ".tagscanrc.json",
        r#"{ "tags": ["hack"], "reporter": "raw" }"#,
    )?;

    let output = test.command().arg("a.js").output()?;

    assert_eq!(stdout(&output).trim(), "a.js:1 HACK config tag");
    Ok(())
}

#[test]
fn test_cli_reporter_overrides_config() -> Result<()> {
    let test = CliTest::with_file("a.js", "// TODO: x\n")?;
    test.write_file(".tagscanrc.json", r#"{ "reporter": "json" }"#)?;

    let output = test.command().args(["a.js", "--reporter", "raw"]).output()?;

    assert_eq!(stdout(&output).trim(), "a.js:1 TODO x");
    Ok(())
}

#[test]
fn test_config_associations_extend_the_registry() -> Result<()> {
    let test = CliTest::with_file("query.xql", "-- TODO: from an associated grammar\n")?;
    test.write_file(
        ".tagscanrc.json",
        r#"{ "associations": { ".xql": { "parserName": "haskellParser" } }, "reporter": "raw" }"#,
    )?;

    let output = test.command().arg("query.xql").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("from an associated grammar"));
    Ok(())
}

#[test]
fn test_malformed_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("a.js", "// TODO: x\n")?;
    test.write_file(".tagscanrc.json", "{ not json")?;

    let output = test.command().arg("a.js").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));
    Ok(())
}

#[test]
fn test_unsupported_files_are_skipped_not_fatal() -> Result<()> {
    let test = CliTest::with_file("a.js", "// TODO: kept\n")?;
    test.write_file("image.qqq", "binary-ish\n")?;

    let output = test
        .command()
        .args([".", "--reporter", "raw", "--verbose"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("kept"));
    assert!(stderr(&output).contains("skipped"));
    Ok(())
}
