use std::{collections::BTreeSet, sync::Arc};

use swc_common::{FileName, GLOBALS, Globals, SourceFile, SourceMap, Spanned};
use swc_ecma_ast::{CallExpr, Callee, EsVersion, Expr, ExprOrSpread, Lit, MemberProp, NewExpr};
use swc_ecma_parser::{
    EsSyntax, Parser, StringInput, Syntax,
    error::Error as SwcError,
    input::Tokens,
    lexer::Lexer,
    unstable::{Token, TokenValue},
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{ConfigError, ParseError, SourceKind};

/// Extracts string-literal keys passed to a localization function.
#[derive(Debug, Clone)]
pub struct JsExtractor {
    function: String,
}

impl JsExtractor {
    /// Build an extractor matching calls to `function`, which must be a
    /// plain JS identifier.
    pub fn new(function: &str) -> Result<Self, ConfigError> {
        if !is_identifier(function) {
            return Err(ConfigError::InvalidJsFunction(function.to_string()));
        }
        Ok(Self {
            function: function.to_string(),
        })
    }

    /// Return the sorted, deduplicated keys `content` passes to the
    /// localization function.
    ///
    /// `localize("key")`, `obj.localize("key")` and `new localize("key")`
    /// match; calls whose first argument is not a string literal are skipped.
    ///
    /// Source the parser rejects (Flow annotations, a top-level `return`, an
    /// unfinished call) falls back to a token scan for `localize ( "key"`.
    /// Only a lexical error, such as an unterminated string, fails.
    pub fn extract(&self, content: &str) -> Result<Vec<String>, ParseError> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let source_map: Arc<SourceMap> = Default::default();

        GLOBALS.set(&Globals::new(), || {
            let source_file =
                source_map.new_source_file(FileName::Anon.into(), content.to_string());

            let mut parser = Parser::new(syntax(), StringInput::from(&*source_file), None);
            let keys = match parser.parse_program() {
                Ok(program) => {
                    let mut collector = CallCollector {
                        function: &self.function,
                        keys: BTreeSet::new(),
                    };
                    program.visit_with(&mut collector);
                    collector.keys
                }
                Err(_) => self
                    .scan_tokens(&source_file)
                    .map_err(|e| to_parse_error(&source_map, e))?,
            };

            Ok(keys.into_iter().collect())
        })
    }

    /// Match `function ( "key"` on the raw token stream.
    ///
    /// Without a parser the lexer reads every `/` as division, so regex
    /// literals are not recognized here.
    fn scan_tokens(&self, source_file: &SourceFile) -> Result<BTreeSet<String>, SwcError> {
        let mut lexer = Lexer::new(
            syntax(),
            EsVersion::latest(),
            StringInput::from(source_file),
            None,
        );
        let mut keys = BTreeSet::new();
        // 0: looking for the name, 1: name seen, 2: `(` seen
        let mut state = 0;

        let mut next = lexer.first_token();
        loop {
            match next.token {
                Token::Eof => break,
                Token::Error => {
                    if let Some(TokenValue::Error(error)) = lexer.take_token_value() {
                        return Err(error);
                    }
                    state = 0;
                }
                Token::LParen if state == 1 => state = 2,
                Token::Str if state == 2 => {
                    if let Some(TokenValue::Str(value)) = lexer.take_token_value()
                        && let Some(value) = value.as_str()
                    {
                        keys.insert(value.to_string());
                    }
                    state = 0;
                }
                _ if lexer.read_string(next.span) == self.function => state = 1,
                _ => state = 0,
            }
            next = lexer.next_token();
        }

        Ok(keys)
    }
}

fn syntax() -> Syntax {
    Syntax::Es(EsSyntax {
        jsx: true,
        ..Default::default()
    })
}

fn to_parse_error(source_map: &SourceMap, error: SwcError) -> ParseError {
    let span = error.span();
    let (line, column) = if span.is_dummy() {
        (None, None)
    } else {
        let loc = source_map.lookup_char_pos(span.lo);
        (Some(loc.line), Some(loc.col_display + 1))
    };

    ParseError {
        source_kind: SourceKind::Js,
        message: error.kind().msg().to_string(),
        line,
        column,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Collects first string-literal arguments of matching calls.
struct CallCollector<'a> {
    function: &'a str,
    keys: BTreeSet<String>,
}

impl CallCollector<'_> {
    fn is_localize(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Ident(ident) => ident.sym.as_str() == self.function,
            Expr::Member(member) => {
                matches!(&member.prop, MemberProp::Ident(prop) if prop.sym.as_str() == self.function)
            }
            _ => false,
        }
    }

    fn collect_first(&mut self, args: &[ExprOrSpread]) {
        if let Some(arg) = args.first()
            && arg.spread.is_none()
            && let Expr::Lit(Lit::Str(s)) = &*arg.expr
            && let Some(value) = s.value.as_str()
        {
            self.keys.insert(value.to_string());
        }
    }
}

impl Visit for CallCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee
            && self.is_localize(callee)
        {
            self.collect_first(&node.args);
        }

        node.visit_children_with(self);
    }

    fn visit_new_expr(&mut self, node: &NewExpr) {
        if self.is_localize(&node.callee)
            && let Some(args) = &node.args
        {
            self.collect_first(args);
        }

        node.visit_children_with(self);
    }
}
