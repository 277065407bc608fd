use crate::error::{PgBindError, Result};
use crate::params::Params;
use crate::traits::{Parameter, Statement};
use crate::types::{PlaceholderStyle, PreparedStatement};

/// A template rewritten to positional markers.
/// Occurrence `i` of `names` binds at position `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    sql: String,
    names: Vec<String>,
}

impl Template {
    /// Scans `template` once, left to right, replacing each `:name` with the
    /// next positional marker. Quoted text, comments and `::` casts are
    /// copied as is.
    pub fn parse(template: &str, style: PlaceholderStyle) -> Self {
        let mut sql = String::with_capacity(template.len());
        let mut names = Vec::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' | '"' => {
                    sql.push(c);
                    for inner in chars.by_ref() {
                        sql.push(inner);
                        if inner == c {
                            break;
                        }
                    }
                }
                '-' if chars.peek() == Some(&'-') => {
                    sql.push(c);
                    for inner in chars.by_ref() {
                        sql.push(inner);
                        if inner == '\n' {
                            break;
                        }
                    }
                }
                '/' if chars.peek() == Some(&'*') => {
                    sql.push(c);
                    sql.extend(chars.next());
                    let mut prev = '\0';
                    for inner in chars.by_ref() {
                        sql.push(inner);
                        if prev == '*' && inner == '/' {
                            break;
                        }
                        prev = inner;
                    }
                }
                ':' if chars.peek() == Some(&':') => {
                    chars.next();
                    sql.push_str("::");
                }
                ':' if chars
                    .peek()
                    .is_some_and(|n| n.is_ascii_alphabetic() || *n == '_') =>
                {
                    let mut name = String::new();
                    while let Some(&n) = chars.peek() {
                        if !(n.is_ascii_alphanumeric() || n == '_') {
                            break;
                        }
                        name.push(n);
                        chars.next();
                    }
                    names.push(name);
                    style.write_marker(&mut sql, names.len());
                }
                _ => sql.push(c),
            }
        }

        Self { sql, names }
    }

    /// SQL with positional markers.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Placeholder names in order of occurrence, repeats included.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of positional markers.
    pub fn positions(&self) -> usize {
        self.names.len()
    }
}

/// SQL template with named placeholders (`:name`) plus the parameters that
/// fill them.
///
/// ```
/// use pgbind::builders::NamedQuery;
/// use pgbind::params::{IntParam, Params};
/// use pgbind::types::{PlaceholderStyle, SqlValue};
///
/// let query = NamedQuery::new(
///     "SELECT name FROM users WHERE id = :id OR parent = :id",
///     Params::new().with(IntParam::new("id", 7))?,
/// );
/// let stmt = query.prepare(PlaceholderStyle::Numbered)?;
/// assert_eq!(stmt.sql(), "SELECT name FROM users WHERE id = $1 OR parent = $2");
/// assert_eq!(stmt.values()?, vec![SqlValue::Int32(7), SqlValue::Int32(7)]);
/// # Ok::<(), pgbind::PgBindError>(())
/// ```
#[derive(Debug)]
pub struct NamedQuery {
    template: String,
    params: Params,
    strict: bool,
    verbatim: bool,
}

impl NamedQuery {
    pub fn new(template: impl Into<String>, params: Params) -> Self {
        Self {
            template: template.into(),
            params,
            strict: false,
            verbatim: false,
        }
    }

    /// A statement without parameters. The SQL is sent exactly as given.
    pub fn simple(sql: impl Into<String>) -> Self {
        Self {
            verbatim: true,
            ..Self::new(sql, Params::new())
        }
    }

    /// Treat supplied parameters that the template never references as errors.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The template as written.
    pub fn sql(&self) -> &str {
        &self.template
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Rewrites the template to positional markers.
    pub fn template(&self, style: PlaceholderStyle) -> Template {
        if self.verbatim {
            return Template {
                sql: self.template.clone(),
                names: Vec::new(),
            };
        }
        Template::parse(&self.template, style)
    }

    /// Binds every placeholder occurrence of `template` into `statement`.
    ///
    /// All names are resolved before the first bind call, so a missing (or,
    /// in strict mode, unused) parameter leaves the statement untouched.
    pub fn bind(&self, template: &Template, statement: &mut dyn Statement) -> Result<()> {
        let resolved = template
            .names()
            .iter()
            .map(|name| {
                self.params
                    .get(name)
                    .ok_or_else(|| PgBindError::MissingParameter(name.clone()))
            })
            .collect::<Result<Vec<&dyn Parameter>>>()?;

        for name in self.params.names() {
            if !template.names().iter().any(|n| n == name) {
                if self.strict {
                    return Err(PgBindError::UnusedParameter(name.to_string()));
                }
                log::warn!("parameter {} is not referenced by {:?}", name, self.template);
            }
        }

        for (i, param) in resolved.into_iter().enumerate() {
            let position = i + 1;
            log::trace!("binding :{} = {} at {}", param.name(), param.as_text(), position);
            param.prepare(statement, position)?;
        }
        Ok(())
    }

    /// Builds a fully bound statement for a driver using `style` markers.
    pub fn prepare(&self, style: PlaceholderStyle) -> Result<PreparedStatement> {
        let template = self.template(style);
        let mut statement = PreparedStatement::new(template.sql(), template.positions());
        self.bind(&template, &mut statement)?;
        Ok(statement)
    }
}
