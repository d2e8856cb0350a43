//! Type references in GraphQL syntax (`[User!]!`)
//!
//! A [`TypeRef`] names types instead of pointing at them. It is what schema
//! configuration and the command line carry until a
//! [`TypeRegistry`](crate::TypeRegistry) resolves it.

use crate::cache::WrapperKind;
use crate::ty::{GraphQLType, TypeKind};
use gqlkit_diagnostics::{
    ErrorBuilder, GQL0001, GQL0002, GQL0003, GQL0004, GQL0005, Result, Span,
};
use std::fmt;
use std::str::FromStr;
use winnow::ascii::multispace0;
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Deepest list nesting [`TypeRef::parse`] accepts
pub const MAX_LIST_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Name at the bottom of all wrappers
    pub fn base_name(&self) -> &str {
        let mut type_ref = self;
        loop {
            match type_ref {
                Self::Named(name) => return name,
                Self::List(inner) | Self::NonNull(inner) => type_ref = inner.as_ref(),
            }
        }
    }

    /// Split into the base name and the wrappers around it, outermost first
    pub fn wrappers(&self) -> (&str, Vec<WrapperKind>) {
        let mut wrappers = Vec::new();
        let mut type_ref = self;
        loop {
            match type_ref {
                Self::Named(name) => return (name.as_str(), wrappers),
                Self::List(inner) => {
                    wrappers.push(WrapperKind::List);
                    type_ref = inner.as_ref();
                }
                Self::NonNull(inner) => {
                    wrappers.push(WrapperKind::NonNull);
                    type_ref = inner.as_ref();
                }
            }
        }
    }

    /// Reference that resolves back to `ty` by name
    pub fn from_type(ty: &GraphQLType) -> Self {
        let mut wrappers = Vec::new();
        let mut base = ty;
        loop {
            match base.kind() {
                TypeKind::List(list) => {
                    wrappers.push(WrapperKind::List);
                    base = list.of_type();
                }
                TypeKind::NonNull(non_null) => {
                    wrappers.push(WrapperKind::NonNull);
                    base = non_null.of_type();
                }
                _ => break,
            }
        }
        wrappers
            .into_iter()
            .rev()
            .fold(Self::named(base.name().unwrap_or_default()), |inner, kind| match kind {
                WrapperKind::List => Self::list(inner),
                WrapperKind::NonNull => Self::non_null(inner),
            })
    }

    /// Parse a type reference, allowing surrounding whitespace
    ///
    /// Lists nested deeper than [`MAX_LIST_DEPTH`] are rejected before parsing.
    pub fn parse(source: &str) -> Result<Self> {
        check_depth(source)?;
        delimited(multispace0, type_ref, multispace0)
            .parse(source)
            .map_err(|e| {
                let offset = e.offset();
                let rest = &source[offset..];
                let (code, message) = match rest.chars().next() {
                    None if source.trim().is_empty() => (GQL0002, "Expected a type reference".to_string()),
                    None if source.contains('[') => (GQL0004, "Expected ']' before end of input".to_string()),
                    None => (GQL0002, "Unexpected end of input".to_string()),
                    Some(c) if c.is_ascii_digit() || c == '-' => {
                        (GQL0003, format!("Invalid type name starting with '{c}'"))
                    }
                    Some(c) => (GQL0001, format!("Unexpected character '{c}'")),
                };
                ErrorBuilder::new(code, message)
                    .span(Span::single(offset), source)
                    .parse(source)
            })
    }
}

impl FromStr for TypeRef {
    type Err = gqlkit_diagnostics::TypeSysError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, wrappers) = self.wrappers();
        for kind in &wrappers {
            if *kind == WrapperKind::List {
                f.write_str("[")?;
            }
        }
        f.write_str(name)?;
        for kind in wrappers.iter().rev() {
            match kind {
                WrapperKind::List => f.write_str("]")?,
                WrapperKind::NonNull => f.write_str("!")?,
            }
        }
        Ok(())
    }
}

// Boxed chains are unlinked one layer at a time so deep references drop without recursion.
impl Drop for TypeRef {
    fn drop(&mut self) {
        let mut next = self.take_inner();
        while let Some(mut inner) = next {
            next = inner.take_inner();
        }
    }
}

impl TypeRef {
    fn take_inner(&mut self) -> Option<TypeRef> {
        match self {
            Self::Named(_) => None,
            Self::List(inner) | Self::NonNull(inner) => {
                Some(std::mem::replace(&mut **inner, Self::Named(String::new())))
            }
        }
    }
}

fn check_depth(source: &str) -> Result<()> {
    let mut depth = 0usize;
    for (offset, c) in source.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => continue,
        }
        if depth > MAX_LIST_DEPTH {
            return Err(ErrorBuilder::new(
                GQL0005,
                format!("Lists may nest at most {MAX_LIST_DEPTH} levels deep"),
            )
            .span(Span::single(offset), source)
            .parse(source));
        }
    }
    Ok(())
}

fn name(input: &mut &str) -> ModalResult<String> {
    (
        one_of(|c: char| c == '_' || c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c == '_' || c.is_ascii_alphanumeric()),
    )
        .take()
        .map(str::to_owned)
        .context(StrContext::Label("type name"))
        .parse_next(input)
}

/// `[` commits: anything malformed after it is reported where it happens.
fn list(input: &mut &str) -> ModalResult<TypeRef> {
    preceded(
        ('[', multispace0),
        cut_err(terminated(
            type_ref,
            (
                multispace0,
                ']'.context(StrContext::Expected(StrContextValue::CharLiteral(']'))),
            ),
        )),
    )
    .map(TypeRef::list)
    .parse_next(input)
}

fn type_ref(input: &mut &str) -> ModalResult<TypeRef> {
    let base = alt((list, name.map(TypeRef::Named))).parse_next(input)?;
    let required = opt(preceded(multispace0, '!')).parse_next(input)?;
    Ok(match required {
        Some(_) => TypeRef::non_null(base),
        None => base,
    })
}
