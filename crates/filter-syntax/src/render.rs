use crate::{
    ast::expr::{Condition, FilterExpr},
    dialect::{Dialect, OData},
};
use std::fmt;

pub trait Render {
    fn render(&self, r: &mut Renderer);
}

pub struct Renderer<'a> {
    pub out: String,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            out: String::new(),
            dialect,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders `expr` in the given dialect.
pub fn render(expr: &FilterExpr, dialect: &dyn Dialect) -> String {
    let mut r = Renderer::new(dialect);
    expr.render(&mut r);
    r.finish()
}

fn precedence(expr: &FilterExpr) -> u8 {
    match expr {
        FilterExpr::Or(children) if children.len() > 1 => 1,
        FilterExpr::And(children) if children.len() > 1 => 2,
        _ => 3,
    }
}

impl FilterExpr {
    fn render_group(&self, children: &[FilterExpr], keyword: &str, empty: bool, r: &mut Renderer) {
        if children.is_empty() {
            r.out.push_str(r.dialect.render_const(empty));
            return;
        }

        let own = precedence(self);
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                r.out.push(' ');
                r.out.push_str(keyword);
                r.out.push(' ');
            }
            if precedence(child) < own {
                r.out.push('(');
                child.render(r);
                r.out.push(')');
            } else {
                child.render(r);
            }
        }
    }
}

impl Render for FilterExpr {
    fn render(&self, r: &mut Renderer) {
        match self {
            FilterExpr::Leaf(cond) => cond.render(r),
            FilterExpr::And(children) => {
                let keyword = r.dialect.and_keyword();
                self.render_group(children, keyword, true, r);
            }
            FilterExpr::Or(children) => {
                let keyword = r.dialect.or_keyword();
                self.render_group(children, keyword, false, r);
            }
            FilterExpr::Not(inner) => {
                r.out.push_str(r.dialect.not_keyword());
                r.out.push_str(" (");
                inner.render(r);
                r.out.push(')');
            }
            FilterExpr::Const(value) => r.out.push_str(r.dialect.render_const(*value)),
        }
    }
}

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        let fragment = r
            .dialect
            .render_condition(&self.field, self.op, &self.value);
        r.out.push_str(&fragment);
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self, &OData))
    }
}
