//! Syntax tree definitions for minic.
//!
//! Every node is owned by exactly one parent (or by the caller holding the [`Program`] root). Children live in
//! `Box`/`Vec` slots, so dropping a node frees its whole subtree exactly once, including trees the parser
//! abandoned halfway through construction. There are no parent links; traversal is strictly top-down.
//!
//! Each node is wrapped in [`Node<T>`], which carries the source [`Position`] and a resolved type slot. The slot is
//! `None` until the semantic analyzer annotates the tree.

use std::fmt;

use minic_core::DataType;
use minic_core::lang::operators::{self, OperatorId};

/// 1-based source location (line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A syntax node with its source position and resolved type slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub node: T,
    pub pos: Position,
    pub ty: Option<DataType>,
}

impl<T> Node<T> {
    pub fn new(node: T, pos: Position) -> Self {
        Self { node, pos, ty: None }
    }

    /// The annotated type, or `void` when the analyzer has not (or could not) resolve one.
    pub fn resolved_type(&self) -> DataType {
        self.ty.unwrap_or(DataType::Void)
    }
}

pub type ExprNode = Node<Expr>;
pub type StmtNode = Node<Statement>;
pub type DeclNode = Node<Declaration>;

/// Root of the tree: an ordered sequence of top-level declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<DeclNode>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level declaration, taking ownership of it.
    pub fn add_child(&mut self, decl: DeclNode) {
        self.declarations.push(decl);
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Variable(VarDecl),
    Directive(Directive),
}

/// `const` / `static` prefixes on a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Qualifiers {
    pub is_const: bool,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub qualifiers: Qualifiers,
    pub return_type: DataType,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: DataType,
    pub name: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub qualifiers: Qualifiers,
    pub ty: DataType,
    pub name: String,
    pub init: Option<ExprNode>,
}

/// A preprocessor line. Only `#include` is understood; other directives are recorded by name and skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `#include <path>` (`system = true`) or `#include "path"`.
    Include { path: String, system: bool },
    Unknown { name: String },
}

// ============================================================================
// Statements
// ============================================================================

/// Compound statement: an ordered sequence of statements with its own scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<StmtNode>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement, taking ownership of it.
    pub fn add_child(&mut self, stmt: StmtNode) {
        self.statements.push(stmt);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Compound(Block),
    VarDecl(VarDecl),
    If(IfStmt),
    While(WhileStmt),
    Return(Option<ExprNode>),
    Break,
    Continue,
    /// Expression statement; `None` is the empty statement `;`.
    Expr(Option<ExprNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: ExprNode,
    pub then_branch: Box<StmtNode>,
    pub else_branch: Option<Box<StmtNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: ExprNode,
    pub body: Box<StmtNode>,
}

// ============================================================================
// Expressions
// ============================================================================

/// Callee name recorded when a call target is not a bare identifier.
pub const UNKNOWN_CALLEE: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assign {
        target: Box<ExprNode>,
        value: Box<ExprNode>,
    },
    Ternary {
        condition: Box<ExprNode>,
        then_expr: Box<ExprNode>,
        else_expr: Box<ExprNode>,
    },
    Binary(Box<ExprNode>, BinaryOp, Box<ExprNode>),
    Unary(UnaryOp, Box<ExprNode>),
    Call(CallExpr),
    Ident(String),
    Literal(Literal),
}

impl Expr {
    /// Identifiers, literals and calls print without parentheses.
    pub fn is_primary(&self) -> bool {
        matches!(self, Expr::Ident(_) | Expr::Literal(_) | Expr::Call(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<ExprNode>,
}

/// Literal values keep their source text (numbers, chars) or unescaped contents (strings).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(String),
    Float(String),
    Char(String),
    Str(String),
}

impl Literal {
    pub fn text(&self) -> &str {
        match self {
            Literal::Int(s) | Literal::Float(s) | Literal::Char(s) | Literal::Str(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Comma,
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Operator token backing this binary operator; `None` for `,`, which is punctuation.
    pub const fn operator_id(self) -> Option<OperatorId> {
        match self {
            BinaryOp::Comma => None,
            BinaryOp::Or => Some(OperatorId::OrOr),
            BinaryOp::And => Some(OperatorId::AndAnd),
            BinaryOp::Eq => Some(OperatorId::EqEq),
            BinaryOp::NotEq => Some(OperatorId::NotEq),
            BinaryOp::Lt => Some(OperatorId::Lt),
            BinaryOp::Gt => Some(OperatorId::Gt),
            BinaryOp::LtEq => Some(OperatorId::LtEq),
            BinaryOp::GtEq => Some(OperatorId::GtEq),
            BinaryOp::Add => Some(OperatorId::Plus),
            BinaryOp::Sub => Some(OperatorId::Minus),
            BinaryOp::Mul => Some(OperatorId::Star),
            BinaryOp::Div => Some(OperatorId::Slash),
            BinaryOp::Mod => Some(OperatorId::Percent),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self.operator_id() {
            Some(id) => operators::as_str(id),
            None => ",",
        }
    }

    /// `== != < > <= >=`
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq
        )
    }

    /// `&& ||`
    pub const fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }

    /// `+ - * / %`
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    BitNot,
    PreInc,
    PreDec,
}

impl UnaryOp {
    pub const fn operator_id(self) -> OperatorId {
        match self {
            UnaryOp::Plus => OperatorId::Plus,
            UnaryOp::Neg => OperatorId::Minus,
            UnaryOp::Not => OperatorId::Bang,
            UnaryOp::BitNot => OperatorId::Tilde,
            UnaryOp::PreInc => OperatorId::PlusPlus,
            UnaryOp::PreDec => OperatorId::MinusMinus,
        }
    }

    /// Map a prefix operator token to its unary operator.
    pub const fn from_operator(id: OperatorId) -> Option<UnaryOp> {
        match id {
            OperatorId::Plus => Some(UnaryOp::Plus),
            OperatorId::Minus => Some(UnaryOp::Neg),
            OperatorId::Bang => Some(UnaryOp::Not),
            OperatorId::Tilde => Some(UnaryOp::BitNot),
            OperatorId::PlusPlus => Some(UnaryOp::PreInc),
            OperatorId::MinusMinus => Some(UnaryOp::PreDec),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        operators::as_str(self.operator_id())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Node kinds and outline walk
// ============================================================================

/// Tag for every node kind in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    FunctionDecl,
    Param,
    VarDecl,
    Directive,
    Compound,
    If,
    While,
    Return,
    Break,
    Continue,
    ExprStmt,
    Assign,
    Ternary,
    Binary,
    Unary,
    Call,
    Ident,
    Literal,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::FunctionDecl => "FunctionDecl",
            NodeKind::Param => "Param",
            NodeKind::VarDecl => "VarDecl",
            NodeKind::Directive => "Directive",
            NodeKind::Compound => "Compound",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::Return => "Return",
            NodeKind::Break => "Break",
            NodeKind::Continue => "Continue",
            NodeKind::ExprStmt => "ExprStmt",
            NodeKind::Assign => "Assign",
            NodeKind::Ternary => "Ternary",
            NodeKind::Binary => "Binary",
            NodeKind::Unary => "Unary",
            NodeKind::Call => "Call",
            NodeKind::Ident => "Ident",
            NodeKind::Literal => "Literal",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Declaration {
    pub fn kind(&self) -> NodeKind {
        match self {
            Declaration::Function(_) => NodeKind::FunctionDecl,
            Declaration::Variable(_) => NodeKind::VarDecl,
            Declaration::Directive(_) => NodeKind::Directive,
        }
    }
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Compound(_) => NodeKind::Compound,
            Statement::VarDecl(_) => NodeKind::VarDecl,
            Statement::If(_) => NodeKind::If,
            Statement::While(_) => NodeKind::While,
            Statement::Return(_) => NodeKind::Return,
            Statement::Break => NodeKind::Break,
            Statement::Continue => NodeKind::Continue,
            Statement::Expr(_) => NodeKind::ExprStmt,
        }
    }
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Assign { .. } => NodeKind::Assign,
            Expr::Ternary { .. } => NodeKind::Ternary,
            Expr::Binary(..) => NodeKind::Binary,
            Expr::Unary(..) => NodeKind::Unary,
            Expr::Call(_) => NodeKind::Call,
            Expr::Ident(_) => NodeKind::Ident,
            Expr::Literal(_) => NodeKind::Literal,
        }
    }
}

/// One line of a pre-order walk over the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub depth: usize,
    pub kind: NodeKind,
    /// Kind-specific payload: names, operator spellings, literal values.
    pub label: Option<String>,
    pub ty: Option<DataType>,
}

impl Program {
    /// Pre-order walk of every node, starting with the program root itself.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut out = Outline::default();
        out.push(0, NodeKind::Program, None, None);
        for decl in &self.declarations {
            out.declaration(1, decl);
        }
        out.entries
    }

    /// Node kinds in pre-order.
    pub fn kinds(&self) -> Vec<NodeKind> {
        self.outline().into_iter().map(|e| e.kind).collect()
    }

    /// Number of nodes reachable from the root, the root included.
    pub fn node_count(&self) -> usize {
        self.outline().len()
    }
}

impl fmt::Display for Program {
    /// Indented tree dump (one node per line).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.outline() {
            write!(f, "{:width$}{}", "", entry.kind, width = entry.depth * 2)?;
            if let Some(label) = &entry.label {
                write!(f, " {label}")?;
            }
            if let Some(ty) = entry.ty {
                write!(f, " : {ty}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    fn push(&mut self, depth: usize, kind: NodeKind, label: Option<String>, ty: Option<DataType>) {
        self.entries.push(OutlineEntry { depth, kind, label, ty });
    }

    fn declaration(&mut self, depth: usize, decl: &DeclNode) {
        match &decl.node {
            Declaration::Function(func) => {
                let label = format!("{} {}", func.return_type, func.name);
                self.push(depth, NodeKind::FunctionDecl, Some(label), decl.ty);
                for param in &func.params {
                    self.push(depth + 1, NodeKind::Param, Some(format!("{} {}", param.ty, param.name)), None);
                }
                self.block(depth + 1, &func.body, None);
            }
            Declaration::Variable(var) => self.var_decl(depth, var, decl.ty),
            Declaration::Directive(Directive::Include { path, system }) => {
                let label = if *system { format!("include <{path}>") } else { format!("include \"{path}\"") };
                self.push(depth, NodeKind::Directive, Some(label), None);
            }
            Declaration::Directive(Directive::Unknown { name }) => {
                self.push(depth, NodeKind::Directive, Some(name.clone()), None);
            }
        }
    }

    fn var_decl(&mut self, depth: usize, var: &VarDecl, ty: Option<DataType>) {
        self.push(depth, NodeKind::VarDecl, Some(format!("{} {}", var.ty, var.name)), ty);
        if let Some(init) = &var.init {
            self.expr(depth + 1, init);
        }
    }

    fn block(&mut self, depth: usize, block: &Block, ty: Option<DataType>) {
        self.push(depth, NodeKind::Compound, None, ty);
        for stmt in &block.statements {
            self.statement(depth + 1, stmt);
        }
    }

    fn statement(&mut self, depth: usize, stmt: &StmtNode) {
        match &stmt.node {
            Statement::Compound(block) => self.block(depth, block, stmt.ty),
            Statement::VarDecl(var) => self.var_decl(depth, var, stmt.ty),
            Statement::If(if_stmt) => {
                self.push(depth, NodeKind::If, None, stmt.ty);
                self.expr(depth + 1, &if_stmt.condition);
                self.statement(depth + 1, &if_stmt.then_branch);
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.statement(depth + 1, else_branch);
                }
            }
            Statement::While(while_stmt) => {
                self.push(depth, NodeKind::While, None, stmt.ty);
                self.expr(depth + 1, &while_stmt.condition);
                self.statement(depth + 1, &while_stmt.body);
            }
            Statement::Return(value) => {
                self.push(depth, NodeKind::Return, None, stmt.ty);
                if let Some(value) = value {
                    self.expr(depth + 1, value);
                }
            }
            Statement::Break => self.push(depth, NodeKind::Break, None, stmt.ty),
            Statement::Continue => self.push(depth, NodeKind::Continue, None, stmt.ty),
            Statement::Expr(expr) => {
                self.push(depth, NodeKind::ExprStmt, None, stmt.ty);
                if let Some(expr) = expr {
                    self.expr(depth + 1, expr);
                }
            }
        }
    }

    fn expr(&mut self, depth: usize, expr: &ExprNode) {
        match &expr.node {
            Expr::Assign { target, value } => {
                self.push(depth, NodeKind::Assign, Some("=".to_string()), expr.ty);
                self.expr(depth + 1, target);
                self.expr(depth + 1, value);
            }
            Expr::Ternary {
                condition,
                then_expr,
                else_expr,
            } => {
                self.push(depth, NodeKind::Ternary, None, expr.ty);
                self.expr(depth + 1, condition);
                self.expr(depth + 1, then_expr);
                self.expr(depth + 1, else_expr);
            }
            Expr::Binary(left, op, right) => {
                self.push(depth, NodeKind::Binary, Some(op.to_string()), expr.ty);
                self.expr(depth + 1, left);
                self.expr(depth + 1, right);
            }
            Expr::Unary(op, operand) => {
                self.push(depth, NodeKind::Unary, Some(op.to_string()), expr.ty);
                self.expr(depth + 1, operand);
            }
            Expr::Call(call) => {
                self.push(depth, NodeKind::Call, Some(call.name.clone()), expr.ty);
                for arg in &call.args {
                    self.expr(depth + 1, arg);
                }
            }
            Expr::Ident(name) => self.push(depth, NodeKind::Ident, Some(name.clone()), expr.ty),
            Expr::Literal(lit) => {
                let label = match lit {
                    Literal::Int(s) | Literal::Float(s) => s.clone(),
                    Literal::Char(s) => format!("'{s}'"),
                    Literal::Str(s) => format!("{s:?}"),
                };
                self.push(depth, NodeKind::Literal, Some(label), expr.ty);
            }
        }
    }
}
