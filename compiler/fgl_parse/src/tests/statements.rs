//! One production at a time.

#![allow(clippy::unwrap_used, reason = "test assertions")]

use pretty_assertions::assert_eq;

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::{
    AcceptStmt, AcceptType, CloseAction, CloseTarget, DatabaseForm, DeferType, ExecuteTarget,
    ExitType, FetchPosition, KeyOption, OptionKind, ParamDirection, ReportDestination,
};
use fgl_ir::{ExprKind, Span, StmtKind};

use super::{body, codes, messages, module, single};
use crate::error::ErrorContext;

/// Every statement-leading keyword, as written in a routine body.
const STATEMENT_KEYWORDS: &[&str] = &[
    "accept", "call", "close", "constant", "continue", "database", "defer", "describe", "execute",
    "exit", "fetch", "finish", "for", "foreach", "free", "goto", "if", "label", "let", "need",
    "open", "options", "output", "pause", "prepare", "printx", "return", "schema", "skip",
    "sleep", "sql", "start", "terminate", "validate", "while", "&",
];

#[test]
fn test_every_statement_keyword_before_paren() {
    for keyword in STATEMENT_KEYWORDS {
        let out = body(&format!("{keyword} )"));
        assert!(!out.errors.is_empty(), "`{keyword} )` parsed without errors");
        let first = &out.program.body.stmts[0];
        assert_eq!(first.span.start, 0, "`{keyword} )` starts at {}", first.span);
    }
}

#[test]
fn test_every_module_keyword_before_paren() {
    for keyword in ["main", "function", "report", "schema", "database", "constant", "&"] {
        let out = module(&format!("{keyword} )"));
        assert!(!out.errors.is_empty(), "`{keyword} )` parsed without errors");
        assert_eq!(out.program.body.stmts[0].span.start, 0);
    }
}

#[test]
fn test_accept_construct() {
    let out = body("accept construct");
    assert!(out.errors.is_empty());
    let stmt = single(&out);
    assert_eq!(
        stmt.kind,
        StmtKind::Accept(AcceptStmt {
            accept_type: Some(AcceptType::Construct)
        })
    );
    assert_eq!(stmt.span, Span::new(0, 16));
    assert!(stmt.complete);
}

#[test]
fn test_accept_rejects_other_word() {
    let out = body("accept foo");
    assert_eq!(
        messages(&out),
        vec!["Accept statement must be of form: ACCEPT {CONSTRUCT | INPUT | DIALOG | DISPLAY}"]
    );
    assert_eq!(out.errors[0].span, Span::new(7, 10));
    assert_eq!(
        out.errors[0].context,
        Some(ErrorContext::Statement("ACCEPT"))
    );
    let stmt = single(&out);
    assert_eq!(stmt.kind, StmtKind::Accept(AcceptStmt { accept_type: None }));
    assert_eq!(stmt.span, Span::new(0, 10));
    assert!(!stmt.complete);
}

#[test]
fn test_close_targets() {
    let out = body("close window w\nclose database\nclose c1");
    assert!(out.errors.is_empty());
    let targets: Vec<_> = out
        .program
        .body
        .stmts
        .iter()
        .map(|s| match &s.kind {
            StmtKind::Close(close) => close.target.clone(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert!(matches!(&targets[0], Some(CloseTarget::Window(Some(w))) if w.as_str() == "w"));
    assert_eq!(targets[1], Some(CloseTarget::Database));
    assert!(matches!(&targets[2], Some(CloseTarget::Cursor(c)) if c.as_str() == "c1"));
}

#[test]
fn test_close_window_needs_name() {
    let out = body("close window");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    assert!(!single(&out).complete);
}

#[test]
fn test_defer() {
    let out = body("defer quit");
    assert!(out.errors.is_empty());
    assert!(matches!(
        &single(&out).kind,
        StmtKind::Defer(d) if d.defer_type == Some(DeferType::Quit)
    ));

    let out = body("defer )");
    assert_eq!(
        messages(&out),
        vec!["expected `INTERRUPT` or `QUIT`, found `)`"]
    );
    assert_eq!(single(&out).span, Span::new(0, 7));
}

#[test]
fn test_exit_program_missing_code() {
    let out = body("exit program -");
    assert_eq!(codes(&out), vec![ErrorCode::E1004]);
    let stmt = single(&out);
    let StmtKind::Exit(exit) = &stmt.kind else {
        panic!("expected EXIT, got {stmt:?}");
    };
    assert_eq!(exit.exit_type, Some(ExitType::Program));
    assert_eq!(exit.exit_code, None);
    assert_eq!(stmt.span, Span::new(0, 14));
    assert!(!stmt.complete);
}

#[test]
fn test_exit_program_negative_code() {
    let out = body("exit program -3");
    assert!(out.errors.is_empty());
    let StmtKind::Exit(exit) = &single(&out).kind else {
        panic!("expected EXIT");
    };
    let code = out.arena.get(exit.exit_code.unwrap());
    assert!(matches!(code.kind, ExprKind::Unary { .. }));
    assert_eq!(code.span, Span::new(13, 15));
}

#[test]
fn test_exit_program_expression_code() {
    let out = body("exit program status + 1");
    assert!(out.errors.is_empty());
    let StmtKind::Exit(exit) = &single(&out).kind else {
        panic!("expected EXIT");
    };
    assert!(exit.exit_code.is_some());
    assert_eq!(single(&out).span, Span::new(0, 23));
}

#[test]
fn test_exit_unknown_type_consumed() {
    let out = body("exit loop");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    let stmt = single(&out);
    assert!(matches!(&stmt.kind, StmtKind::Exit(e) if e.exit_type.is_none()));
    assert_eq!(stmt.span, Span::new(0, 9));
}

#[test]
fn test_continue() {
    let out = body("continue while");
    assert!(out.errors.is_empty());
    assert!(matches!(
        &single(&out).kind,
        StmtKind::Continue(c) if c.target == Some(ExitType::While)
    ));

    let out = body("continue case");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
}

#[test]
fn test_fetch_with_position() {
    let out = body("fetch next c1 into a, b.c");
    assert!(out.errors.is_empty());
    let StmtKind::Fetch(fetch) = &single(&out).kind else {
        panic!("expected FETCH");
    };
    assert_eq!(fetch.position, Some(FetchPosition::Next));
    assert_eq!(fetch.cursor.as_ref().unwrap().as_str(), "c1");
    assert_eq!(fetch.into.len(), 2);
}

#[test]
fn test_fetch_position_word_as_cursor() {
    let out = body("fetch last");
    assert!(out.errors.is_empty());
    let StmtKind::Fetch(fetch) = &single(&out).kind else {
        panic!("expected FETCH");
    };
    assert_eq!(fetch.position, None);
    assert_eq!(fetch.cursor.as_ref().unwrap().as_str(), "last");
}

#[test]
fn test_fetch_absolute() {
    let out = body("fetch absolute 5 c");
    assert!(out.errors.is_empty());
    let StmtKind::Fetch(fetch) = &single(&out).kind else {
        panic!("expected FETCH");
    };
    assert!(matches!(fetch.position, Some(FetchPosition::Absolute(Some(_)))));
}

#[test]
fn test_free_requires_name() {
    let out = body("free");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    let stmt = single(&out);
    assert_eq!(stmt.span, Span::new(0, 4));
    assert!(!stmt.complete);
}

#[test]
fn test_goto_colon_optional() {
    for source in ["goto :done", "goto done"] {
        let out = body(source);
        assert!(out.errors.is_empty(), "{source}");
        assert!(matches!(
            &single(&out).kind,
            StmtKind::Goto(g) if g.label.as_ref().unwrap().as_str() == "done"
        ));
    }
}

#[test]
fn test_label_missing_colon_still_complete() {
    let out = body("label done");
    assert_eq!(messages(&out), vec!["expected `:`, found end of file"]);
    let stmt = single(&out);
    assert!(stmt.complete);
    assert_eq!(stmt.span, Span::new(0, 10));
}

#[test]
fn test_need() {
    let out = body("need 3 lines");
    assert!(out.errors.is_empty());
    assert!(single(&out).complete);

    let out = body("need lines");
    assert_eq!(codes(&out), vec![ErrorCode::E1004]);
    let stmt = single(&out);
    assert_eq!(stmt.span, Span::new(0, 10));
    assert!(!stmt.complete);
}

#[test]
fn test_open_using_directions() {
    let out = body("open c using a in, b with reoptimization");
    assert!(out.errors.is_empty());
    let StmtKind::Open(open) = &single(&out).kind else {
        panic!("expected OPEN");
    };
    let directions: Vec<_> = open.using.iter().map(|u| u.direction).collect();
    assert_eq!(directions, vec![Some(ParamDirection::In), None]);
    assert!(open.with_reoptimization);
    assert_eq!(open.using[0].span, Span::new(13, 17));
}

#[test]
fn test_open_missing_operand_is_incomplete() {
    let out = body("open c with\nsleep 1");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    let stmts = &out.program.body.stmts;
    assert_eq!(stmts.len(), 2);
    let StmtKind::Open(open) = &stmts[0].kind else {
        panic!("expected OPEN");
    };
    assert!(!open.with_reoptimization);
    assert!(!stmts[0].complete);
    assert!(matches!(stmts[1].kind, StmtKind::Sleep(_)));

    let out = body("open c using a,");
    assert!(!single(&out).complete);
}

#[test]
fn test_output_to_report() {
    let out = body("output to report r(1, x)");
    assert!(out.errors.is_empty());
    let StmtKind::OutputToReport(output) = &single(&out).kind else {
        panic!("expected OUTPUT TO REPORT");
    };
    assert_eq!(output.report.as_ref().unwrap().as_str(), "r");
    assert_eq!(output.args.len(), 2);

    let out = body("output to report r");
    assert_eq!(messages(&out), vec!["expected `(`, found end of file"]);
    assert!(!single(&out).complete);
}

#[test]
fn test_pause_optional_message() {
    let out = body("pause");
    assert!(out.errors.is_empty());
    assert!(matches!(&single(&out).kind, StmtKind::Pause(p) if p.message.is_none()));

    let out = body("pause \"press a key\"");
    assert!(matches!(&single(&out).kind, StmtKind::Pause(p) if p.message.is_some()));
}

#[test]
fn test_prepare() {
    let out = body("prepare s from \"select 1\"");
    assert!(out.errors.is_empty());
    assert!(single(&out).complete);

    let out = body("prepare s");
    assert_eq!(messages(&out), vec!["expected `FROM`, found end of file"]);

    let out = body("prepare from 'x'");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    assert!(matches!(&single(&out).kind, StmtKind::Prepare(p) if p.sql.is_some()));
}

#[test]
fn test_printx_name_clause() {
    let out = body("printx name = r 1, 2");
    assert!(out.errors.is_empty());
    let StmtKind::Printx(printx) = &single(&out).kind else {
        panic!("expected PRINTX");
    };
    assert_eq!(printx.name.as_ref().unwrap().as_str(), "r");
    assert_eq!(printx.exprs.len(), 2);

    let out = body("printx total");
    let StmtKind::Printx(printx) = &single(&out).kind else {
        panic!("expected PRINTX");
    };
    assert!(printx.name.is_none());
    assert_eq!(printx.exprs.len(), 1);
}

#[test]
fn test_return_values() {
    let out = body("return 1, 2");
    assert!(matches!(&single(&out).kind, StmtKind::Return(r) if r.values.len() == 2));
    let out = body("return");
    assert!(matches!(&single(&out).kind, StmtKind::Return(r) if r.values.is_empty()));
}

#[test]
fn test_database_forms() {
    let out = body("schema stores\ndatabase d1\ndescribe database d2");
    assert!(out.errors.is_empty());
    let forms: Vec<_> = out
        .program
        .body
        .stmts
        .iter()
        .map(|s| match &s.kind {
            StmtKind::Database(db) => db.form,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        forms,
        vec![
            Some(DatabaseForm::Schema),
            Some(DatabaseForm::Database),
            Some(DatabaseForm::DescribeDatabase)
        ]
    );
}

#[test]
fn test_describe_without_database() {
    let out = body("describe d");
    assert_eq!(
        messages(&out),
        vec!["incomplete legacy database specification"]
    );
    let stmt = single(&out);
    assert!(!stmt.complete);
    assert_eq!(stmt.span, Span::new(0, 10));
}

#[test]
fn test_skip_to_top_of_page() {
    let out = body("skip to top of page");
    assert!(out.errors.is_empty());
    let stmt = single(&out);
    let StmtKind::Skip(skip) = &stmt.kind else {
        panic!("expected SKIP");
    };
    assert!(skip.to_top_of_page);
    assert_eq!(skip.num_lines, None);
    assert_eq!(stmt.span, Span::new(0, 19));
}

#[test]
fn test_skip_to_stops_at_first_missing_word() {
    let out = body("skip to top");
    assert_eq!(messages(&out), vec!["expected `OF`, found end of file"]);
    assert!(!single(&out).complete);
}

#[test]
fn test_skip_lines() {
    let out = body("skip 2 lines");
    assert!(out.errors.is_empty());
    let stmt = single(&out);
    assert!(matches!(&stmt.kind, StmtKind::Skip(s) if s.num_lines.is_some()));
    assert_eq!(stmt.span, Span::new(0, 12));

    let out = body("skip line");
    assert!(out.errors.is_empty());
    assert!(matches!(&single(&out).kind, StmtKind::Skip(s) if s.num_lines.is_none()));
}

#[test]
fn test_sleep_requires_seconds() {
    let out = body("sleep");
    assert_eq!(codes(&out), vec![ErrorCode::E1004]);
    assert!(!single(&out).complete);
}

#[test]
fn test_start_report_destination() {
    let out = body("start report r to file \"out.txt\"");
    assert!(out.errors.is_empty());
    let StmtKind::StartReport(start) = &single(&out).kind else {
        panic!("expected START REPORT");
    };
    assert!(matches!(start.destination, Some(ReportDestination::File(Some(_)))));

    let out = body("start report r to");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    assert!(!single(&out).complete);
}

#[test]
fn test_finish_and_terminate_report() {
    let out = body("finish report r\nterminate report r");
    assert!(out.errors.is_empty());
    let kinds: Vec<&str> = out.program.body.stmts.iter().map(|s| s.kind.name()).collect();
    assert_eq!(kinds, vec!["FINISH REPORT", "TERMINATE REPORT"]);
}

#[test]
fn test_validate() {
    let out = body("validate a, b like t.a, t.*");
    assert!(out.errors.is_empty());
    let StmtKind::Validate(validate) = &single(&out).kind else {
        panic!("expected VALIDATE");
    };
    assert_eq!(validate.targets.len(), 2);
    assert_eq!(validate.columns.len(), 2);
    assert!(matches!(
        out.arena.get(validate.columns[1]).kind,
        ExprKind::MemberAll { .. }
    ));

    let out = body("validate a");
    assert_eq!(messages(&out), vec!["expected `LIKE`, found end of file"]);
}

#[test]
fn test_sql_block() {
    let out = body("sql select * from t end sql");
    assert!(out.errors.is_empty());
    let stmt = single(&out);
    let StmtKind::SqlBlock(sql) = &stmt.kind else {
        panic!("expected SQL");
    };
    assert_eq!(sql.tokens.len(), 4);
    assert_eq!(sql.body, Span::new(3, 20));
    assert_eq!(stmt.span, Span::new(0, 27));
}

#[test]
fn test_sql_block_unterminated() {
    let out = body("sql select 1");
    assert_eq!(codes(&out), vec![ErrorCode::E1005]);
    assert_eq!(out.errors[0].context, Some(ErrorContext::SqlBlock));
    let stmt = single(&out);
    assert!(!stmt.complete);
    assert!(matches!(&stmt.kind, StmtKind::SqlBlock(s) if s.body == Span::new(3, 12)));
}

#[test]
fn test_execute_forms() {
    let out = body("execute immediate s");
    assert!(out.errors.is_empty());
    assert!(matches!(
        &single(&out).kind,
        StmtKind::Execute(e) if matches!(e.target, ExecuteTarget::Immediate(Some(_)))
    ));

    let out = body("execute p into a using b");
    assert!(out.errors.is_empty());
    let StmtKind::Execute(execute) = &single(&out).kind else {
        panic!("expected EXECUTE");
    };
    assert_eq!(execute.into.len(), 1);
    assert_eq!(execute.using.len(), 1);
}

#[test]
fn test_options_clauses() {
    let out = body("options input wrap, field order form, message line 2");
    assert!(out.errors.is_empty());
    let StmtKind::Options(options) = &single(&out).kind else {
        panic!("expected OPTIONS");
    };
    assert_eq!(options.clauses.len(), 3);
    assert!(matches!(
        options.clauses[0].kind,
        OptionKind::InputWrap { wrap: true }
    ));
    assert!(options.clauses.iter().all(|c| c.complete));
    assert!(single(&out).complete);
}

#[test]
fn test_options_missing_operand_is_incomplete() {
    for source in [
        "options display attribute (red",
        "options comment line",
        "options on terminate signal call",
        "options on close application call",
        "options sql interrupt",
        "options input wrap, help file",
    ] {
        let out = body(source);
        assert!(!out.errors.is_empty(), "{source}");
        let stmt = &out.program.body.stmts[0];
        assert!(!stmt.complete, "{source}");
        let StmtKind::Options(options) = &stmt.kind else {
            panic!("expected OPTIONS for {source}");
        };
        assert!(options.clauses.iter().any(|c| !c.complete), "{source}");
    }
}

#[test]
fn test_options_event_and_key() {
    let out = body("options on close application call cleanup, accept key control-b");
    assert!(out.errors.is_empty());
    let StmtKind::Options(options) = &single(&out).kind else {
        panic!("expected OPTIONS");
    };
    assert!(matches!(
        &options.clauses[0].kind,
        OptionKind::OnCloseApplication(Some(CloseAction::Call(Some(f)))) if f.as_str() == "cleanup"
    ));
    assert!(matches!(
        &options.clauses[1].kind,
        OptionKind::Key { key: KeyOption::Accept, name: Some(k) } if k.as_str() == "control-b"
    ));
}

#[test]
fn test_options_unknown_clause() {
    let out = body("options foo");
    assert_eq!(
        out.errors[0].message,
        "expected an OPTIONS clause, found `foo`"
    );
    assert!(!out.program.body.stmts[0].complete);
}

#[test]
fn test_preprocessor_line() {
    let out = body("& include \"x.4gl\"\nsleep 1");
    assert!(out.errors.is_empty());
    let stmts = &out.program.body.stmts;
    assert_eq!(stmts.len(), 2);
    let StmtKind::Preprocessor(line) = &stmts[0].kind else {
        panic!("expected preprocessor line");
    };
    assert_eq!(line.directive(), Some("include"));
    assert_eq!(line.tokens.len(), 2);
    assert_eq!(stmts[0].span, Span::new(0, 17));
}

#[test]
fn test_preprocessor_line_at_eof() {
    let out = body("& define X # note");
    assert_eq!(codes(&out), vec![ErrorCode::E1005]);
    assert_eq!(out.errors[0].context, Some(ErrorContext::PreprocessorLine));
    let stmt = single(&out);
    assert!(!stmt.complete);
    assert!(matches!(&stmt.kind, StmtKind::Preprocessor(p) if p.tokens.len() == 3));
}

#[test]
fn test_preprocessor_line_skips_leading_trivia() {
    let out = body("sleep 1\n\n& x\nsleep 2");
    assert!(out.errors.is_empty());
    let stmts = &out.program.body.stmts;
    let spans: Vec<Span> = stmts.iter().map(|s| s.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 7), Span::new(9, 12), Span::new(13, 20)]
    );
    let StmtKind::Preprocessor(line) = &stmts[1].kind else {
        panic!("expected preprocessor line");
    };
    assert_eq!(line.tokens.len(), 1);
    assert_eq!(line.directive(), Some("x"));

    let out = body("{c}& x\n");
    assert!(out.errors.is_empty());
    let stmt = single(&out);
    assert_eq!(stmt.span, Span::new(3, 6));
    assert!(matches!(&stmt.kind, StmtKind::Preprocessor(p) if p.tokens.len() == 1));
}

#[test]
fn test_preprocessor_line_after_comment_in_routine() {
    let out = module("main\n\n  # note\n& define A\nend main\n");
    assert!(out.errors.is_empty());
    let StmtKind::Routine(main) = &single(&out).kind else {
        panic!("expected MAIN");
    };
    let stmts = &main.body.stmts;
    assert_eq!(stmts.len(), 1, "{stmts:#?}");
    assert!(matches!(stmts[0].kind, StmtKind::Preprocessor(_)));
    assert_eq!(stmts[0].span, Span::new(15, 25));
}

#[test]
fn test_constant_with_type() {
    let out = body("constant pi decimal(5,2) = 3.14, n = 2");
    assert!(out.errors.is_empty());
    let StmtKind::Constant(constant) = &single(&out).kind else {
        panic!("expected CONSTANT");
    };
    assert_eq!(constant.defs.len(), 2);
    assert_eq!(
        constant.defs[0].type_name.as_ref().map(|t| t.as_str()),
        Some("decimal")
    );
    assert_eq!(constant.defs[0].span, Span::new(9, 31));
    assert!(constant.defs[1].type_name.is_none());
}

#[test]
fn test_constant_missing_value() {
    let out = body("constant x =");
    assert_eq!(codes(&out), vec![ErrorCode::E1004]);
    assert!(!single(&out).complete);
}

#[test]
fn test_let_target_with_suffixes() {
    let out = body("let a.b[1] = 2, 3");
    assert!(out.errors.is_empty());
    let StmtKind::Let(stmt) = &single(&out).kind else {
        panic!("expected LET");
    };
    let target = out.arena.get(stmt.target.unwrap());
    assert!(matches!(target.kind, ExprKind::Index { .. }));
    assert_eq!(target.span, Span::new(4, 10));
    assert_eq!(stmt.values.len(), 2);
}

#[test]
fn test_call_returning() {
    let out = body("call f(1) returning x, y");
    assert!(out.errors.is_empty());
    let StmtKind::Call(call) = &single(&out).kind else {
        panic!("expected CALL");
    };
    assert_eq!(call.args.len(), 1);
    assert_eq!(call.returning.len(), 2);

    let out = body("call f");
    assert_eq!(messages(&out), vec!["expected `(`, found end of file"]);
    assert!(!single(&out).complete);
}
