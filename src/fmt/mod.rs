//! Canonical CalQL text for a [`QuerySpec`].
//!
//! Each clause writer appends to any [`std::fmt::Write`] sink and hands the
//! sink back so calls can be chained. Writing never fails on its own; the
//! only possible error is one raised by the sink.

use std::fmt::{Error, Write};

use crate::ast::{
    AggregationOp, AggregationSelection, AttributeClause, AttributeSelection, Condition,
    ConditionOp, FilterSelection, FormatSpec, PreprocessSpec, QuerySpec, SortSelection,
};


type Sink<'a, W> = std::result::Result<&'a mut W, Error>;

/// Separator in front of the `index`-th element of a clause.
fn lead(index: usize, keyword: &'static str) -> &'static str {
    if index == 0 { keyword } else { ", " }
}

/// Append a condition.
///
/// Inclusive comparisons are written as the negation of the opposite strict
/// comparison (`a<=b` becomes ` not a>b`). `None` writes nothing.
pub fn format_condition<'a, W: Write + ?Sized>(out: &'a mut W, cond: &Condition) -> Sink<'a, W> {
    if cond.op == ConditionOp::None {
        return Ok(out);
    }
    if cond.op.is_negated() {
        out.write_str(" not ")?;
    }
    out.write_str(&cond.attr_name)?;
    if let Some(symbol) = cond.op.symbol() {
        write!(out, "{}{}", symbol, cond.value)?;
    }
    Ok(out)
}

fn format_call<'a, W: Write + ?Sized>(out: &'a mut W, op: &AggregationOp) -> Sink<'a, W> {
    write!(out, "{}(", op.name())?;
    for (i, arg) in op.args.iter().enumerate() {
        write!(out, "{}{}", lead(i, ""), arg)?;
    }
    out.write_char(')')?;
    Ok(out)
}

/// Append `target=name(args…)`, followed by ` if <cond>` when guarded.
pub fn format_preprocess_op<'a, W: Write + ?Sized>(
    out: &'a mut W,
    spec: &PreprocessSpec,
) -> Sink<'a, W> {
    write!(out, "{}=", spec.target)?;
    let out = format_call(out, &spec.op)?;
    if spec.is_conditional() {
        out.write_str(" if ")?;
        format_condition(out, &spec.cond)?;
    }
    Ok(out)
}

/// Append `name(args…)`.
pub fn format_aggregation_op<'a, W: Write + ?Sized>(
    out: &'a mut W,
    op: &AggregationOp,
) -> Sink<'a, W> {
    format_call(out, op)
}

/// Shared body of `select` and `group by`. Returns how many items were written.
fn format_attribute_list<W: Write + ?Sized>(
    out: &mut W,
    clause: &AttributeClause,
    keyword: &'static str,
    mut decorate: impl FnMut(&mut W, &str) -> std::fmt::Result,
) -> std::fmt::Result {
    let AttributeSelection::List(list) = &clause.selection else {
        return Ok(());
    };
    let mut count = 0;
    if clause.use_path {
        write!(out, "{}path", keyword)?;
        count += 1;
    }
    for attr in list {
        write!(out, "{}{}", lead(count, keyword), attr)?;
        decorate(out, attr)?;
        count += 1;
    }
    Ok(())
}

/// Append the complete query text for `spec`.
///
/// Clauses come out in a fixed order: `let`, `aggregate`, `select`,
/// `group by`, `where`, `order by`, `format`. A clause keyword is only
/// written when the clause has something to render.
pub fn format_spec<'a, W: Write + ?Sized>(out: &'a mut W, spec: &QuerySpec) -> Sink<'a, W> {
    for (i, op) in spec.preprocess_ops.iter().enumerate() {
        out.write_str(lead(i, "let "))?;
        format_preprocess_op(out, op)?;
    }

    if let AggregationSelection::List(list) = &spec.aggregate {
        for (i, op) in list.iter().enumerate() {
            out.write_str(lead(i, " aggregate "))?;
            format_aggregation_op(out, op)?;
        }
    }

    match &spec.select.selection {
        AttributeSelection::All => out.write_str(" select *")?,
        AttributeSelection::List(_) => {
            format_attribute_list(out, &spec.select, " select ", |out, attr| {
                if let Some(alias) = spec.aliases.get(attr) {
                    write!(out, " as {}", alias)?;
                }
                if let Some(unit) = spec.units.get(attr) {
                    write!(out, " unit {}", unit)?;
                }
                Ok(())
            })?
        }
        AttributeSelection::Default | AttributeSelection::None => {}
    }

    format_attribute_list(out, &spec.groupby, " group by ", |_, _| Ok(()))?;

    if let FilterSelection::List(list) = &spec.filter {
        for (i, cond) in list.iter().enumerate() {
            out.write_str(lead(i, " where "))?;
            format_condition(out, cond)?;
        }
    }

    if let SortSelection::List(list) = &spec.sort {
        for (i, sort) in list.iter().enumerate() {
            write!(out, "{}{} {}", lead(i, " order by "), sort.attribute, sort.order)?;
        }
    }

    if let FormatSpec::User { formatter, kwargs } = &spec.format {
        write!(out, " format {}", formatter.name)?;
        if !kwargs.is_empty() {
            for (i, (key, value)) in kwargs.iter().enumerate() {
                write!(out, "{}{}={}", lead(i, "("), key, value)?;
            }
            out.write_char(')')?;
        }
    }

    Ok(out)
}

/// Owned-buffer formatter.
///
/// ```
/// use calql::prelude::*;
///
/// let spec = QuerySpec::new().with_aggregate(count());
/// let text = Formatter::new().format(&spec).unwrap();
/// assert_eq!(text, " aggregate count()");
/// ```
#[derive(Debug, Default)]
pub struct Formatter {
    buffer: String,
    newline: bool,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminate the output with `\n`.
    pub fn with_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    pub fn format(self, spec: &QuerySpec) -> std::result::Result<String, Error> {
        self.format_all(std::iter::once(spec))
    }

    /// Format several specifications, one per line.
    ///
    /// Documents are always separated by `\n`; the newline setting only
    /// controls the terminator after the last one.
    pub fn format_all<'s>(
        mut self,
        specs: impl IntoIterator<Item = &'s QuerySpec>,
    ) -> std::result::Result<String, Error> {
        let mut count = 0;
        for spec in specs {
            if count > 0 {
                self.buffer.push('\n');
            }
            format_spec(&mut self.buffer, spec)?;
            count += 1;
        }
        tracing::trace!(documents = count, bytes = self.buffer.len(), "formatted query specs");
        if self.newline && count > 0 {
            self.buffer.push('\n');
        }
        Ok(self.buffer)
    }
}
