//! Interaction statements: ACCEPT, DEFER, OPTIONS, PAUSE, SLEEP.

use fgl_diagnostic::ErrorCode;
use fgl_ir::ast::{
    AcceptStmt, AcceptType, AttributeTarget, CloseAction, DeferStmt, DeferType, FieldOrder,
    KeyOption, OptionClause, OptionKind, OptionsStmt, PauseStmt, ScreenLine, SleepStmt,
};
use fgl_ir::{Ident, Stmt, StmtKind, TokenKind};

use crate::error::{describe_token, ParseError};
use crate::outcome::ParseOutcome;
use crate::recovery::TokenSet;
use crate::stream::{TokenPredicate, TokenStream};
use crate::Parser;

const ACCEPT_FORM: &str =
    "Accept statement must be of form: ACCEPT {CONSTRUCT | INPUT | DIALOG | DISPLAY}";

const OPTION_START: TokenSet = TokenSet::new()
    .with(TokenKind::Input)
    .with(TokenKind::Display)
    .with(TokenKind::Field)
    .with(TokenKind::Comment)
    .with(TokenKind::Error)
    .with(TokenKind::Form)
    .with(TokenKind::Menu)
    .with(TokenKind::Message)
    .with(TokenKind::Prompt)
    .with(TokenKind::Accept)
    .with(TokenKind::Delete)
    .with(TokenKind::Insert)
    .with(TokenKind::Next)
    .with(TokenKind::Previous)
    .with(TokenKind::Help)
    .with(TokenKind::Sql)
    .with(TokenKind::On);

const ATTRIBUTE_KEYWORDS: TokenSet = TokenSet::new()
    .with(TokenKind::Attribute)
    .with(TokenKind::Attributes);

impl<S: TokenStream> Parser<S> {
    /// `ACCEPT {CONSTRUCT | INPUT | DIALOG | DISPLAY}`
    pub fn parse_accept(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Accept) {
            return self.decline(TokenSet::single(TokenKind::Accept));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let accept_type = match self.current_kind() {
            TokenKind::Construct => Some(AcceptType::Construct),
            TokenKind::Input => Some(AcceptType::Input),
            TokenKind::Dialog => Some(AcceptType::Dialog),
            TokenKind::Display => Some(AcceptType::Display),
            _ => None,
        };
        if accept_type.is_some() {
            self.bump();
        } else {
            self.error_here(ErrorCode::E1002, ACCEPT_FORM);
            self.skip_rejected();
        }
        self.commit(
            mark,
            start,
            StmtKind::Accept(AcceptStmt { accept_type }),
            accept_type.is_some(),
        )
    }

    /// `DEFER {INTERRUPT | QUIT}`
    pub fn parse_defer(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Defer) {
            return self.decline(TokenSet::single(TokenKind::Defer));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let defer_type = match self.current_kind() {
            TokenKind::Interrupt => Some(DeferType::Interrupt),
            TokenKind::Quit => Some(DeferType::Quit),
            _ => None,
        };
        if defer_type.is_some() {
            self.bump();
        } else {
            let expected = TokenSet::new()
                .with(TokenKind::Interrupt)
                .with(TokenKind::Quit);
            self.expected_one_of(expected);
            self.skip_rejected();
        }
        self.commit(
            mark,
            start,
            StmtKind::Defer(DeferStmt { defer_type }),
            defer_type.is_some(),
        )
    }

    /// `PAUSE [expr]`
    pub fn parse_pause(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Pause) {
            return self.decline(TokenSet::single(TokenKind::Pause));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let message = self.try_expr();
        self.commit(mark, start, StmtKind::Pause(PauseStmt { message }), true)
    }

    /// `SLEEP expr`
    pub fn parse_sleep(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Sleep) {
            return self.decline(TokenSet::single(TokenKind::Sleep));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let seconds = self.expect_expr("number of seconds");
        self.commit(
            mark,
            start,
            StmtKind::Sleep(SleepStmt { seconds }),
            seconds.is_some(),
        )
    }

    /// `OPTIONS option [, option]*`
    pub fn parse_options(&mut self) -> ParseOutcome<Stmt> {
        if !self.at(TokenKind::Options) {
            return self.decline(TokenSet::single(TokenKind::Options));
        }
        let mark = self.mark();
        let start = self.bump().span.start;
        let mut clauses = Vec::new();
        let mut complete = true;
        loop {
            match self.option_clause() {
                Some(clause) => {
                    complete &= clause.complete;
                    clauses.push(clause);
                }
                None => {
                    complete = false;
                    break;
                }
            }
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.commit(
            mark,
            start,
            StmtKind::Options(OptionsStmt { clauses }),
            complete,
        )
    }

    /// Report that one of `expected` was required here.
    pub(crate) fn expected_one_of(&mut self, expected: TokenSet) {
        let span = self.error_span();
        let err = ParseError::expected_tokens(expected, self.current(), span);
        self.error(err);
    }

    fn option_clause(&mut self) -> Option<OptionClause> {
        if !self.at_any(OPTION_START) {
            let span = self.error_span();
            let found = describe_token(self.current());
            self.error(ParseError::new(
                ErrorCode::E1002,
                format!("expected an OPTIONS clause, found {found}"),
                span,
            ));
            return None;
        }
        let start = self.current_span().start;
        let leading = self.bump().kind;
        let kind = match leading {
            TokenKind::Input => self.input_option()?,
            TokenKind::Display => {
                if !self.at_any(ATTRIBUTE_KEYWORDS) {
                    self.expected_one_of(ATTRIBUTE_KEYWORDS);
                    return None;
                }
                OptionKind::Attributes {
                    target: AttributeTarget::Display,
                    attributes: Some(self.attribute_specifier()),
                }
            }
            TokenKind::Field => {
                self.expect(TokenKind::Order)?;
                OptionKind::FieldOrder(self.field_order())
            }
            TokenKind::Comment
            | TokenKind::Error
            | TokenKind::Form
            | TokenKind::Menu
            | TokenKind::Message
            | TokenKind::Prompt => {
                let line = screen_line(leading);
                self.expect(TokenKind::Line)?;
                OptionKind::Line {
                    line,
                    value: self.expect_expr("line number"),
                }
            }
            TokenKind::Help if self.at(TokenKind::File) => {
                self.bump();
                OptionKind::HelpFile(self.expect_expr("help file name"))
            }
            TokenKind::Sql => {
                self.expect(TokenKind::Interrupt)?;
                OptionKind::SqlInterrupt(self.on_off())
            }
            TokenKind::On => self.on_event_option()?,
            _ => {
                let key = key_option(leading)?;
                self.expect(TokenKind::Key)?;
                OptionKind::Key {
                    key,
                    name: self.key_name(),
                }
            }
        };
        Some(OptionClause {
            complete: operands_present(&kind),
            kind,
            span: self.span_from(start),
        })
    }

    /// After `INPUT`: `[NO] WRAP` or `ATTRIBUTES (...)`.
    fn input_option(&mut self) -> Option<OptionKind> {
        match self.current_kind() {
            TokenKind::Wrap => {
                self.bump();
                Some(OptionKind::InputWrap { wrap: true })
            }
            TokenKind::No => {
                self.bump();
                self.expect(TokenKind::Wrap)?;
                Some(OptionKind::InputWrap { wrap: false })
            }
            TokenKind::Attribute | TokenKind::Attributes => Some(OptionKind::Attributes {
                target: AttributeTarget::Input,
                attributes: Some(self.attribute_specifier()),
            }),
            _ => {
                self.expected_one_of(ATTRIBUTE_KEYWORDS.with(TokenKind::Wrap).with(TokenKind::No));
                None
            }
        }
    }

    fn field_order(&mut self) -> Option<FieldOrder> {
        let order = match self.current_kind() {
            TokenKind::Constrained => FieldOrder::Constrained,
            TokenKind::Unconstrained => FieldOrder::Unconstrained,
            TokenKind::Form => FieldOrder::Form,
            _ => {
                self.expected_one_of(
                    TokenSet::new()
                        .with(TokenKind::Constrained)
                        .with(TokenKind::Unconstrained)
                        .with(TokenKind::Form),
                );
                return None;
            }
        };
        self.bump();
        Some(order)
    }

    fn on_off(&mut self) -> Option<bool> {
        let value = match self.current_kind() {
            TokenKind::On => true,
            TokenKind::Off => false,
            _ => {
                self.expected_one_of(TokenSet::new().with(TokenKind::On).with(TokenKind::Off));
                return None;
            }
        };
        self.bump();
        Some(value)
    }

    /// After `ON`: `TERMINATE SIGNAL CALL f` or `CLOSE APPLICATION {STOP | CALL f}`.
    fn on_event_option(&mut self) -> Option<OptionKind> {
        match self.current_kind() {
            TokenKind::Terminate => {
                self.bump();
                self.expect(TokenKind::Signal)?;
                self.expect(TokenKind::Call)?;
                Some(OptionKind::OnTerminateSignal(
                    self.expect_name("function name"),
                ))
            }
            TokenKind::Close => {
                self.bump();
                self.expect(TokenKind::Application)?;
                let action = match self.current_kind() {
                    TokenKind::Stop => {
                        self.bump();
                        Some(CloseAction::Stop)
                    }
                    TokenKind::Call => {
                        self.bump();
                        Some(CloseAction::Call(self.expect_name("function name")))
                    }
                    _ => {
                        self.expected_one_of(
                            TokenSet::new().with(TokenKind::Stop).with(TokenKind::Call),
                        );
                        None
                    }
                };
                Some(OptionKind::OnCloseApplication(action))
            }
            _ => {
                self.expected_one_of(
                    TokenSet::new()
                        .with(TokenKind::Terminate)
                        .with(TokenKind::Close),
                );
                None
            }
        }
    }

    /// Key names such as `F1`, `ESCAPE` or `CONTROL-B`.
    fn key_name(&mut self) -> Option<Ident> {
        let mut name = self.expect_name("key name")?;
        while self.at(TokenKind::Minus) && self.stream.peek(TokenPredicate::Name, 2) {
            self.bump();
            if let Some(part) = self.name() {
                let spelling = format!("{}-{}", name.name, part.name);
                name = Ident::new(spelling, name.span.merge(part.span));
            }
        }
        Some(name)
    }
}

fn operands_present(kind: &OptionKind) -> bool {
    match kind {
        OptionKind::InputWrap { .. } => true,
        OptionKind::FieldOrder(order) => order.is_some(),
        OptionKind::Line { value, .. } | OptionKind::HelpFile(value) => value.is_some(),
        OptionKind::Key { name, .. } | OptionKind::OnTerminateSignal(name) => name.is_some(),
        OptionKind::SqlInterrupt(on) => on.is_some(),
        OptionKind::Attributes { attributes, .. } => {
            attributes.as_ref().is_some_and(|a| a.complete)
        }
        OptionKind::OnCloseApplication(action) => match action {
            Some(CloseAction::Stop) => true,
            Some(CloseAction::Call(func)) => func.is_some(),
            None => false,
        },
    }
}

fn screen_line(kind: TokenKind) -> ScreenLine {
    match kind {
        TokenKind::Comment => ScreenLine::Comment,
        TokenKind::Error => ScreenLine::Error,
        TokenKind::Form => ScreenLine::Form,
        TokenKind::Menu => ScreenLine::Menu,
        TokenKind::Message => ScreenLine::Message,
        _ => ScreenLine::Prompt,
    }
}

fn key_option(kind: TokenKind) -> Option<KeyOption> {
    match kind {
        TokenKind::Accept => Some(KeyOption::Accept),
        TokenKind::Delete => Some(KeyOption::Delete),
        TokenKind::Insert => Some(KeyOption::Insert),
        TokenKind::Next => Some(KeyOption::Next),
        TokenKind::Previous => Some(KeyOption::Previous),
        TokenKind::Help => Some(KeyOption::Help),
        _ => None,
    }
}
