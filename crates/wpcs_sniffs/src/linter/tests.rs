use pretty_assertions::assert_eq;
use wpcs_diagnostic::{RuleCode, Severity};
use wpcs_diagnostic::span_utils::line_number;
use wpcs_ir::TokenKind;

use super::*;

/// Warns on every `;`, to exercise dispatch next to the real rule.
struct SemicolonWarning;

impl Rule for SemicolonWarning {
    fn name(&self) -> &'static str {
        "Test.Semicolon"
    }

    fn register(&self) -> TokenSet {
        TokenSet::single(TokenKind::Semicolon)
    }

    fn check(&self, tokens: &TokenList, index: usize) -> Option<Diagnostic> {
        let token = tokens.get(index)?;
        Some(
            Diagnostic::warning(RuleCode::NotYoda)
                .with_message("semicolon")
                .with_label(token.span, "here")
                .at_token(index),
        )
    }
}

fn lines(source: &str, diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics
        .iter()
        .map(|d| line_number(source, d.primary_span().unwrap()))
        .collect()
}

const SOURCE: &str = "<?php
if ( $a == 'x' ) {
\techo $b === 1;
}
if ( 'x' == $a && $c != null ) {}
";

#[test]
fn test_default_config() {
    let config = LinterConfig::default();
    assert!(config.parallel);
    assert_eq!(config.diagnostics, DiagnosticConfig::unlimited());
}

#[test]
fn test_wordpress_registers_yoda_conditions() {
    let linter = Linter::wordpress();
    assert_eq!(
        linter.rule_names().collect::<Vec<_>>(),
        vec!["WordPress.PHP.YodaConditions"]
    );
    assert!(Linter::new(LinterConfig::default())
        .rule_names()
        .next()
        .is_none());
}

#[test]
fn test_lint_source_reports_in_position_order() {
    let diagnostics = Linter::wordpress().lint_source(SOURCE).unwrap();
    assert_eq!(lines(SOURCE, &diagnostics), vec![2, 3, 5]);
    assert!(diagnostics
        .iter()
        .all(|d| d.code == RuleCode::NotYoda && d.severity == Severity::Error));
}

#[test]
fn test_check_tokens_dispatches_in_source_order() {
    let tokens = wpcs_lexer::lex("<?php $a == 1; $b;").unwrap();
    let linter = Linter::wordpress().with_rule(SemicolonWarning);
    let found: Vec<(Severity, Option<usize>)> = linter
        .check_tokens(&tokens)
        .iter()
        .map(|d| (d.severity, d.token.and_then(|t| t.index())))
        .collect();
    // <?php ws $a ws == ws 1 ; ws $b ;
    assert_eq!(
        found,
        vec![
            (Severity::Error, Some(4)),
            (Severity::Warning, Some(7)),
            (Severity::Warning, Some(10)),
        ]
    );
}

#[test]
fn test_check_tokens_without_rules() {
    let tokens = wpcs_lexer::lex(SOURCE).unwrap();
    let linter = Linter::new(LinterConfig::default());
    assert!(linter.check_tokens(&tokens).is_empty());
}

#[test]
fn test_error_limit_applies_per_source() {
    let linter = Linter::new(LinterConfig {
        parallel: false,
        diagnostics: DiagnosticConfig {
            error_limit: 2,
            deduplicate: false,
        },
    })
    .with_rule(YodaConditions);
    let diagnostics = linter.lint_source(SOURCE).unwrap();
    assert_eq!(lines(SOURCE, &diagnostics), vec![2, 3]);
}

#[test]
fn test_dedup_drops_second_finding_on_a_line() {
    let source = "<?php\nif ( $a == 1 || $b == 2 ) {}\n";
    assert_eq!(Linter::wordpress().lint_source(source).unwrap().len(), 2);

    let mut config = LinterConfig::default();
    config.diagnostics.deduplicate = true;
    let linter = Linter::new(config).with_rule(YodaConditions);
    assert_eq!(linter.lint_source(source).unwrap().len(), 1);
}

#[test]
fn test_lint_file_missing() {
    let missing = Path::new("/definitely/not/here.php");
    let err = Linter::wordpress().lint_file(missing).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("failed to read `/definitely/not/here.php`: "));
    match err {
        LintError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_lex_error_converts() {
    let err: LintError = LexError::SourceTooLarge { len: 7 }.into();
    assert!(matches!(err, LintError::Lex(LexError::SourceTooLarge { len: 7 })));
    assert_eq!(
        err.to_string(),
        LexError::SourceTooLarge { len: 7 }.to_string()
    );
}

#[test]
fn test_lint_batch_keeps_input_order() {
    let files: Vec<SourceFile> = (0..16)
        .map(|i| {
            let body = if i % 2 == 0 {
                "<?php if ( $a == 1 ) {}"
            } else {
                "<?php if ( 1 == $a ) {}"
            };
            SourceFile::new(format!("file{i}.php"), body)
        })
        .collect();

    let parallel = Linter::wordpress().lint_batch(&files);
    let sequential = Linter::new(LinterConfig {
        parallel: false,
        ..LinterConfig::default()
    })
    .with_rule(YodaConditions)
    .lint_batch(&files);

    for reports in [&parallel, &sequential] {
        assert_eq!(reports.len(), files.len());
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.path, PathBuf::from(format!("file{i}.php")));
            assert_eq!(report.error_count(), usize::from(i % 2 == 0));
            assert_eq!(report.is_clean(), i % 2 == 1);
        }
    }
}

#[test]
fn test_lint_paths_reads_files_and_reports_failures() {
    let dir = std::env::temp_dir().join(format!("wpcs_lint_paths_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let good = dir.join("good.php");
    let bad = dir.join("bad.php");
    fs::write(&good, "<?php if ( true === $ok ) {}").unwrap();
    fs::write(&bad, "<?php if ( $ok === true ) {}").unwrap();
    let missing = dir.join("missing.php");

    let reports = Linter::wordpress().lint_paths(&[&good, &bad, &missing]);
    fs::remove_dir_all(&dir).unwrap();

    assert!(reports[0].is_clean());
    assert_eq!(reports[1].error_count(), 1);
    assert!(matches!(reports[2].result, Err(LintError::Io { .. })));
    assert!(reports[2].diagnostics().is_empty());
    assert!(!reports[2].is_clean());
}
