//! Core formatting logic for minic source code
//!
//! Walks the syntax tree and emits canonical C. Every operand that is not an identifier, literal or call is wrapped
//! in parentheses, so the printed text re-parses to the same tree whatever the precedence of its parts.

use super::config::FormatConfig;
use super::writer::FormatWriter;
use crate::frontend::ast::*;

/// Formatter that transforms a syntax tree back to formatted source code
pub struct Formatter {
    writer: FormatWriter,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Format a program and return the formatted source
    pub fn format(mut self, program: &Program) -> String {
        self.format_program(program);
        self.writer.finish()
    }

    // ========================================================================
    // Program
    // ========================================================================

    fn format_program(&mut self, program: &Program) {
        let blank_lines = self.writer.config().blank_lines_top_level;
        let mut prev: Option<&Declaration> = None;

        for decl in &program.declarations {
            if let Some(prev) = prev {
                // Runs of directives or of global variables stay together.
                let same_group = matches!(
                    (prev, &decl.node),
                    (Declaration::Directive(_), Declaration::Directive(_))
                        | (Declaration::Variable(_), Declaration::Variable(_))
                );
                if !same_group {
                    self.writer.blank_lines(blank_lines);
                }
            }
            self.format_declaration(&decl.node);
            prev = Some(&decl.node);
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn format_declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Function(func) => self.format_function(func),
            Declaration::Variable(var) => self.format_var_decl(var),
            Declaration::Directive(directive) => self.format_directive(directive),
        }
    }

    fn format_directive(&mut self, directive: &Directive) {
        match directive {
            Directive::Include { path, system: true } => self.writer.writeln(&format!("#include <{path}>")),
            Directive::Include { path, system: false } => {
                self.writer.writeln(&format!("#include \"{}\"", escape_string(path)));
            }
            Directive::Unknown { name } => self.writer.writeln(&format!("#{name}")),
        }
    }

    fn format_qualifiers(&mut self, qualifiers: &Qualifiers) {
        if qualifiers.is_static {
            self.writer.write("static ");
        }
        if qualifiers.is_const {
            self.writer.write("const ");
        }
    }

    fn format_function(&mut self, func: &FunctionDecl) {
        self.format_qualifiers(&func.qualifiers);
        let params: Vec<String> = func.params.iter().map(|p| format!("{} {}", p.ty, p.name)).collect();
        self.writer
            .write(&format!("{} {}({}) ", func.return_type, func.name, params.join(", ")));
        self.format_block(&func.body);
        self.writer.newline();
    }

    fn format_var_decl(&mut self, var: &VarDecl) {
        self.format_qualifiers(&var.qualifiers);
        self.writer.write(&format!("{} {}", var.ty, var.name));
        if let Some(init) = &var.init {
            self.writer.write(" = ");
            self.format_list_item(init);
        }
        self.writer.writeln(";");
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// `{ ... }` without a trailing newline.
    fn format_block(&mut self, block: &Block) {
        self.writer.writeln("{");
        self.writer.indent();
        for stmt in &block.statements {
            self.format_statement(stmt);
        }
        self.writer.dedent();
        self.writer.write("}");
    }

    /// Every statement ends with a newline.
    fn format_statement(&mut self, stmt: &StmtNode) {
        match &stmt.node {
            Statement::Compound(block) => {
                self.format_block(block);
                self.writer.newline();
            }
            Statement::VarDecl(var) => self.format_var_decl(var),
            Statement::If(if_stmt) => self.format_if(if_stmt),
            Statement::While(while_stmt) => {
                self.writer.write("while (");
                self.format_expr(&while_stmt.condition);
                self.writer.write(")");
                if self.format_body(&while_stmt.body) {
                    self.writer.newline();
                }
            }
            Statement::Return(None) => self.writer.writeln("return;"),
            Statement::Return(Some(value)) => {
                self.writer.write("return ");
                self.format_expr(value);
                self.writer.writeln(";");
            }
            Statement::Break => self.writer.writeln("break;"),
            Statement::Continue => self.writer.writeln("continue;"),
            Statement::Expr(None) => self.writer.writeln(";"),
            Statement::Expr(Some(expr)) => {
                self.format_expr(expr);
                self.writer.writeln(";");
            }
        }
    }

    fn format_if(&mut self, if_stmt: &IfStmt) {
        self.writer.write("if (");
        self.format_expr(&if_stmt.condition);
        self.writer.write(")");
        let braced = self.format_body(&if_stmt.then_branch);

        let Some(else_branch) = &if_stmt.else_branch else {
            if braced {
                self.writer.newline();
            }
            return;
        };
        self.writer.write(if braced { " else" } else { "else" });
        if let Statement::If(nested) = &else_branch.node {
            self.writer.write(" ");
            self.format_if(nested);
        } else if self.format_body(else_branch) {
            self.writer.newline();
        }
    }

    /// Body of `if`/`else`/`while`. A block stays on the header line and is left open after its `}`; anything else
    /// goes on its own indented line. Returns `true` for the block case.
    fn format_body(&mut self, body: &StmtNode) -> bool {
        if let Statement::Compound(block) = &body.node {
            self.writer.write(" ");
            self.format_block(block);
            true
        } else {
            self.writer.newline();
            self.writer.indent();
            self.format_statement(body);
            self.writer.dedent();
            false
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn format_expr(&mut self, expr: &ExprNode) {
        match &expr.node {
            Expr::Assign { target, value } => {
                self.format_operand(target);
                self.write_binary_op("=");
                self.format_operand(value);
            }
            Expr::Ternary {
                condition,
                then_expr,
                else_expr,
            } => {
                self.format_operand(condition);
                self.writer.write(" ? ");
                self.format_operand(then_expr);
                self.writer.write(" : ");
                self.format_operand(else_expr);
            }
            Expr::Binary(left, BinaryOp::Comma, right) => {
                self.format_operand(left);
                self.writer.write(", ");
                self.format_operand(right);
            }
            Expr::Binary(left, op, right) => {
                self.format_operand(left);
                self.write_binary_op(op.as_str());
                self.format_operand(right);
            }
            Expr::Unary(op, operand) => {
                self.writer.write(op.as_str());
                self.format_operand(operand);
            }
            Expr::Call(call) => {
                self.writer.write(&call.name);
                self.writer.write("(");
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        self.writer.write(", ");
                    }
                    self.format_list_item(arg);
                }
                self.writer.write(")");
            }
            Expr::Ident(name) => self.writer.write(name),
            Expr::Literal(lit) => self.format_literal(lit),
        }
    }

    fn format_operand(&mut self, expr: &ExprNode) {
        if expr.node.is_primary() {
            self.format_expr(expr);
        } else {
            self.writer.write("(");
            self.format_expr(expr);
            self.writer.write(")");
        }
    }

    /// Initializers and call arguments are parsed without the `,` operator, so a comma expression there needs
    /// parentheses.
    fn format_list_item(&mut self, expr: &ExprNode) {
        if matches!(expr.node, Expr::Binary(_, BinaryOp::Comma, _)) {
            self.format_operand(expr);
        } else {
            self.format_expr(expr);
        }
    }

    fn write_binary_op(&mut self, op: &str) {
        if self.writer.config().space_around_binary_ops {
            self.writer.write(&format!(" {op} "));
        } else {
            self.writer.write(op);
        }
    }

    fn format_literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Int(text) | Literal::Float(text) => self.writer.write(text),
            Literal::Char(text) => self.writer.write(&format!("'{text}'")),
            Literal::Str(text) => self.writer.write(&format!("\"{}\"", escape_string(text))),
        }
    }
}

/// Undo the tokenizer's unescaping of string contents.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}
