//! Tests for walking and folding parse trees produced by the parser.

mod common;
use common::*;

use strata_sql_core::lexer::Token;
use strata_sql_core::tree::{visit, ParseNode, ParseTreeListener, ParseTreeVisitor, ParseTreeWalker, Rule};

// ===================================================================
// Listeners
// ===================================================================

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl ParseTreeListener for Recorder {
    fn enter_node(&mut self, node: &ParseNode) {
        self.events.push(format!("enter {:?}", node.rule()));
    }

    fn exit_node(&mut self, node: &ParseNode) {
        self.events.push(format!("exit {:?}", node.rule()));
    }

    fn visit_token(&mut self, token: &Token) {
        self.events.push(token.text.clone());
    }
}

/// Collects the text of every column reference.
#[derive(Default)]
struct Columns {
    names: Vec<String>,
}

impl ParseTreeListener for Columns {
    fn enter_node(&mut self, node: &ParseNode) {
        if node.rule() == Rule::ColumnRef {
            self.names.push(node.text());
        }
    }
}

/// Checks that every exit matches the innermost open node.
#[derive(Default)]
struct Nesting {
    open: Vec<Rule>,
    max_depth: usize,
    tokens: Vec<String>,
}

impl ParseTreeListener for Nesting {
    fn enter_node(&mut self, node: &ParseNode) {
        self.open.push(node.rule());
        self.max_depth = self.max_depth.max(self.open.len());
    }

    fn exit_node(&mut self, node: &ParseNode) {
        assert_eq!(self.open.pop(), Some(node.rule()));
    }

    fn visit_token(&mut self, token: &Token) {
        assert!(!self.open.is_empty(), "token outside any node");
        self.tokens.push(token.text.clone());
    }
}

#[test]
fn listener_event_order() {
    let root = parse_expr("a + 1");
    let mut recorder = Recorder::default();
    ParseTreeWalker::walk(&mut recorder, &root);
    assert_eq!(
        recorder.events,
        vec![
            "enter Expr(Binary(Add))",
            "enter ColumnRef",
            "a",
            "exit ColumnRef",
            "+",
            "enter Const(Integer)",
            "1",
            "exit Const(Integer)",
            "exit Expr(Binary(Add))",
        ]
    );
}

#[test]
fn listener_events_are_balanced() {
    let root = parse(
        "SELECT a, f(b) FROM t JOIN u ON t.id = u.id \
         WHERE c IN (SELECT d FROM v) ORDER BY 1",
    );
    let mut nesting = Nesting::default();
    ParseTreeWalker::walk(&mut nesting, &root);
    assert!(nesting.open.is_empty());
    assert!(nesting.max_depth > 5);
    assert_eq!(nesting.tokens.join(" "), root.text());
}

#[test]
fn listener_collects_columns_in_source_order() {
    let root = parse("SELECT a, t.b FROM t WHERE c > (SELECT max(d) FROM u) ORDER BY e");
    let mut columns = Columns::default();
    ParseTreeWalker::walk(&mut columns, &root);
    assert_eq!(columns.names, vec!["a", "t . b", "c", "d", "e"]);
}

// ===================================================================
// Visitors
// ===================================================================

/// Rebuilds the statement text bottom-up.
struct Render;

impl ParseTreeVisitor for Render {
    type Output = String;

    fn visit_node(&mut self, _node: &ParseNode, children: Vec<String>) -> String {
        children.join(" ")
    }

    fn visit_token(&mut self, token: &Token) -> String {
        token.text.clone()
    }
}

/// Counts nodes, ignoring tokens.
struct NodeCount;

impl ParseTreeVisitor for NodeCount {
    type Output = usize;

    fn visit_node(&mut self, _node: &ParseNode, children: Vec<usize>) -> usize {
        1 + children.into_iter().sum::<usize>()
    }

    fn visit_token(&mut self, _token: &Token) -> usize {
        0
    }
}

/// Folds integer arithmetic, giving `None` for anything else.
struct Eval;

impl ParseTreeVisitor for Eval {
    type Output = Option<i64>;

    fn visit_node(&mut self, node: &ParseNode, children: Vec<Option<i64>>) -> Option<i64> {
        use strata_sql_core::tree::{BinaryOp, ConstKind, ExprForm};
        match node.rule() {
            Rule::Const(ConstKind::Integer) => children.into_iter().next().flatten(),
            Rule::ParenExpr => children.get(1).copied().flatten(),
            Rule::Expr(ExprForm::Binary(op)) => {
                let lhs = children.first().copied().flatten()?;
                let rhs = children.get(2).copied().flatten()?;
                match op {
                    BinaryOp::Add => lhs.checked_add(rhs),
                    BinaryOp::Sub => lhs.checked_sub(rhs),
                    BinaryOp::Mul => lhs.checked_mul(rhs),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn visit_token(&mut self, token: &Token) -> Option<i64> {
        token.text.parse().ok()
    }
}

#[test]
fn visitor_rebuilds_text() {
    let root = parse("SELECT CASE WHEN a THEN 1 END AS x FROM t WHERE b::int > 2");
    assert_eq!(visit(&mut Render, &root), root.text());
}

#[test]
fn visitor_counts_match_preorder() {
    let root = parse("WITH w AS (SELECT 1) SELECT * FROM w, LATERAL f(w.x) GROUP BY 1");
    assert_eq!(visit(&mut NodeCount, &root), root.preorder().count());
}

#[test]
fn visitor_folds_arithmetic_by_precedence() {
    assert_eq!(visit(&mut Eval, &parse_expr("1 + 2 * 3")), Some(7));
    assert_eq!(visit(&mut Eval, &parse_expr("(1 + 2) * 3")), Some(9));
    assert_eq!(visit(&mut Eval, &parse_expr("10 - 3 - 2")), Some(5));
    assert_eq!(visit(&mut Eval, &parse_expr("10 - x")), None);
}

// ===================================================================
// Large trees
// ===================================================================

#[test]
fn long_chain_walks_visits_and_drops() {
    let sql = vec!["1"; 10_000].join(" + ");
    let root = parse_expr(&sql);

    assert_eq!(visit(&mut Eval, &root), Some(10_000));
    assert_eq!(visit(&mut NodeCount, &root), 19_999);

    let mut nesting = Nesting::default();
    ParseTreeWalker::walk(&mut nesting, &root);
    assert_eq!(nesting.max_depth, 10_000);
    assert_eq!(nesting.tokens.len(), 19_999);

    let copy = parse_expr(&sql);
    assert!(root.structurally_eq(&copy));
    drop(root);
    drop(copy);
}

// ===================================================================
// Queries
// ===================================================================

#[test]
fn find_all_is_preorder() {
    let root = parse("SELECT (SELECT 1), (SELECT (SELECT 2))");
    let nested = root.find_all(|r| r == Rule::SelectWithParens);
    let texts: Vec<String> = nested.iter().map(|n| n.text()).collect();
    assert_eq!(
        texts,
        vec!["( SELECT 1 )", "( SELECT ( SELECT 2 ) )", "( SELECT 2 )"]
    );
}

#[test]
fn node_spans_cover_their_tokens() {
    let sql = "SELECT  a  +  b FROM t";
    let root = parse(sql);
    for node in root.preorder() {
        let tokens = node.tokens();
        let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
            continue;
        };
        assert_eq!(node.span().start, first.span.start, "{:?}", node.rule());
        assert_eq!(node.span().end, last.span.end, "{:?}", node.rule());
    }
    let expr = root
        .find(|r| matches!(r, Rule::Expr(_)))
        .expect("expression");
    assert_eq!(&sql[expr.span().start..expr.span().end], "a  +  b");
}
