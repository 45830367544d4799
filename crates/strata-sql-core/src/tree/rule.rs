//! Grammar production identifiers.
//!
//! Every [`ParseNode`](super::ParseNode) is labelled with a [`Rule`].
//! Productions with several alternatives carry a tag describing which
//! alternative matched, so consumers dispatch with an exhaustive `match`.

/// The grammar production a parse node was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // Statements
    /// A top-level statement with its optional terminating `;`.
    Statement,
    /// `[WITH ...] SELECT ...`, `VALUES ...`, `TABLE ...` and set operations,
    /// with their `ORDER BY`, limit and locking clauses.
    SelectStmt,
    /// `INSERT INTO ...`.
    InsertStmt,
    /// `UPDATE ... SET ...`.
    UpdateStmt,
    /// `DELETE FROM ...`.
    DeleteStmt,
    /// `COPY ...`.
    CopyStmt,
    /// `LOCK [TABLE] ...`.
    LockStmt,
    /// `DO ...`.
    DoStmt,
    /// `CHECKPOINT`.
    CheckpointStmt,
    /// `FETCH ...` or `MOVE ...`.
    FetchStmt,
    /// `SET ...`.
    VariableSetStmt,
    /// `RESET ...`.
    VariableResetStmt,
    /// `CREATE [TEMP|UNLOGGED] TABLE ...`, including `CREATE TABLE ... AS`.
    CreateTableStmt,
    /// `CREATE [UNIQUE] INDEX ...`.
    CreateIndexStmt,
    /// `CREATE [OR REPLACE] VIEW ...`.
    CreateViewStmt,
    /// `CREATE DATABASE ...`.
    CreateDatabaseStmt,
    /// `ALTER TABLE ...`.
    AlterTableStmt,
    /// `ALTER INDEX ...`.
    AlterIndexStmt,
    /// `DROP TABLE ...`.
    DropTableStmt,
    /// `DROP INDEX ...`.
    DropIndexStmt,
    /// `DROP VIEW ...`.
    DropViewStmt,
    /// `DROP DATABASE ...`.
    DropDatabaseStmt,
    /// `TRUNCATE [TABLE] ...`.
    TruncateStmt,

    // Common table expressions
    /// `WITH [RECURSIVE] cte, ...`.
    WithClause,
    /// `name [(cols)] AS [[NOT] MATERIALIZED] (stmt)`.
    CommonTableExpr,

    // SELECT structure
    /// `SELECT ... FROM ... WHERE ...` without set operations.
    SimpleSelect,
    /// A binary set operation; children are `[left, op..., right]`.
    SetOperation {
        /// The set operator.
        op: SetOp,
        /// `ALL` or `DISTINCT` when written.
        quantifier: Option<SetQuantifier>,
    },
    /// `( select )`.
    SelectWithParens,
    /// `VALUES (...), (...)`.
    ValuesClause,
    /// One parenthesized row of a `VALUES` list.
    ValuesRow,
    /// `TABLE relation`.
    TableCommand,
    /// `ALL`, `DISTINCT` or `DISTINCT ON (...)`.
    DistinctClause,
    /// The comma-separated select list.
    TargetList,
    /// One select-list entry.
    TargetEl,
    /// `AS label` or a bare label after an expression.
    ColumnAlias,
    /// `INTO [TEMP] [TABLE] name`.
    IntoClause,
    /// `FROM ...`.
    FromClause,
    /// `WHERE condition` or `WHERE CURRENT OF cursor`.
    WhereClause,
    /// `CURRENT OF cursor`.
    CurrentOf,
    /// `GROUP BY ...`.
    GroupClause,
    /// `ROLLUP (...)`.
    Rollup,
    /// `CUBE (...)`.
    Cube,
    /// `GROUPING SETS (...)`.
    GroupingSets,
    /// `()` in a grouping list.
    EmptyGroupingSet,
    /// `HAVING condition`.
    HavingClause,
    /// `WINDOW name AS (...), ...`.
    WindowClause,
    /// `name AS (spec)` inside a `WINDOW` clause.
    WindowDefinition,
    /// `( [name] [PARTITION BY ...] [ORDER BY ...] [frame] )`.
    WindowSpec,
    /// `PARTITION BY ...`.
    PartitionClause,
    /// `RANGE|ROWS|GROUPS ...`.
    FrameClause(FrameUnit),
    /// One frame boundary.
    FrameBound(FrameBoundKind),
    /// `EXCLUDE ...`.
    FrameExclusion,
    /// `ORDER BY ...`.
    SortClause,
    /// One `ORDER BY` item.
    SortBy,
    /// `LIMIT count|ALL`.
    LimitClause,
    /// `OFFSET start [ROW|ROWS]`.
    OffsetClause,
    /// `FETCH FIRST|NEXT ... ONLY|WITH TIES`.
    FetchClause,
    /// `FOR UPDATE ...`, possibly repeated, or `FOR READ ONLY`.
    LockingClause,
    /// One `FOR ... [OF ...] [NOWAIT|SKIP LOCKED]` item.
    LockingItem,

    // FROM items
    /// One `FROM` item that is not a join.
    TableRef(TableRefKind),
    /// A join of two table references.
    JoinedTable {
        /// The join type.
        kind: JoinKind,
        /// True for `NATURAL` joins.
        natural: bool,
    },
    /// `ON condition` or `USING (cols)` of a join.
    JoinQual,
    /// `[ONLY] name [*]`.
    RelationExpr,
    /// `[AS] alias [(cols)]`.
    AliasClause,
    /// `(name type, ...)` column definitions of a function alias.
    ColumnDefList,
    /// `name type [COLLATE ...]` in a column definition list, or a table
    /// column with its constraints.
    ColumnDef,
    /// `TABLESAMPLE method (args) [REPEATABLE (seed)]`.
    TableSample,
    /// `ROWS FROM (func, ...)`.
    RowsFrom,
    /// `WITH ORDINALITY`.
    WithOrdinality,
    /// One column of `XMLTABLE (... COLUMNS ...)`.
    XmlTableColumn,
    /// `XMLNAMESPACES (...)`.
    XmlNamespaces,
    /// `PASSING [BY REF|VALUE] expr`.
    XmlPassing,

    // INSERT, UPDATE and DELETE pieces
    /// `name [AS alias]` after `INSERT INTO`.
    InsertTarget,
    /// `(col, ...)` after the insert target.
    InsertColumnList,
    /// `OVERRIDING SYSTEM|USER VALUE`.
    OverridingClause,
    /// `DEFAULT VALUES`.
    DefaultValues,
    /// `ON CONFLICT ...`.
    OnConflict,
    /// The `(index params) [WHERE ...]` or `ON CONSTRAINT name` target.
    ConflictTarget,
    /// One index parameter of a conflict target.
    IndexElem,
    /// `DO NOTHING` or `DO UPDATE SET ...`.
    ConflictAction(ConflictActionKind),
    /// `SET a = 1, (b, c) = (...)`.
    SetClauseList,
    /// One assignment of a `SET` list.
    SetClause,
    /// `col [indirection]` on the left of an assignment.
    SetTarget,
    /// `(col, ...)` on the left of a multi-column assignment.
    SetTargetList,
    /// `RETURNING ...`.
    ReturningClause,
    /// `USING ...` of `DELETE`.
    UsingClause,

    // Utility statement pieces
    /// Legacy `COPY` options.
    CopyOptions,
    /// Parenthesized generic `COPY` options.
    CopyGenericOptions,
    /// One generic `COPY` option.
    CopyGenericOption,
    /// `IN ... MODE` of `LOCK`.
    LockMode,
    /// The direction of `FETCH`/`MOVE`.
    FetchDirection,
    /// The value list of `SET var TO ...`.
    VarValue,
    /// The modes of `SET TRANSACTION` and
    /// `SET SESSION CHARACTERISTICS AS TRANSACTION`.
    TransactionModeList,
    /// `ISOLATION LEVEL ...`, `READ ONLY|WRITE` or `[NOT] DEFERRABLE`.
    TransactionMode,

    // Data definition pieces
    /// The parenthesized element list of `CREATE TABLE`.
    TableElementList,
    /// `[CONSTRAINT name] NOT NULL | CHECK (...) | DEFAULT ... | ...` on a
    /// column.
    ColConstraint,
    /// `[CONSTRAINT name] CHECK | UNIQUE | PRIMARY KEY | FOREIGN KEY ...`
    /// on a table.
    TableConstraint,
    /// `[NOT] DEFERRABLE` or `INITIALLY DEFERRED|IMMEDIATE`.
    ConstraintAttr,
    /// `REFERENCES table [(cols)] [MATCH ...] [ON DELETE|UPDATE ...]`.
    ReferencesClause,
    /// `ON DELETE|UPDATE action`.
    KeyAction,
    /// `LIKE source [INCLUDING|EXCLUDING ...]`.
    TableLikeClause,
    /// The parenthesized options of an identity column.
    SeqOptionList,
    /// One identity column option.
    SeqOption,
    /// `INHERITS (parents)`.
    InheritClause,
    /// `PARTITION BY strategy (keys)`.
    PartitionSpec,
    /// `( name [= value], ... )` storage parameters.
    RelOptions,
    /// One storage parameter.
    RelOption,
    /// `ON COMMIT DROP|DELETE ROWS|PRESERVE ROWS`.
    OnCommitClause,
    /// The `(elem, ...)` column list of `CREATE INDEX`.
    IndexParams,
    /// `INCLUDE (cols)`.
    IncludeClause,
    /// `WITH [CASCADED|LOCAL] CHECK OPTION`.
    ViewCheckOption,
    /// One `name [=] value` option of `CREATE DATABASE`.
    CreatedbOption,
    /// One action of `ALTER TABLE` or `ALTER INDEX`.
    AlterTableCmd,

    // Expressions
    /// An operator expression.
    Expr(ExprForm),
    /// `CAST(expr AS type)` or `expr::type`; children are
    /// `[operand, type]`.
    TypeCast,
    /// A column reference with optional indirection.
    ColumnRef,
    /// An expression followed by indirection.
    Indirection,
    /// One indirection step.
    IndirectionEl(IndirectionKind),
    /// A literal constant.
    Const(ConstKind),
    /// `type 'text'`, `func(args) 'text'` or `INTERVAL 'text' fields`.
    TypedLiteral,
    /// `$n` or `?`.
    Param,
    /// `( expr )` with optional indirection.
    ParenExpr,
    /// A row constructor.
    Row(RowKind),
    /// A parenthesized select used as a value.
    ScalarSubquery,
    /// `EXISTS (select)`.
    Exists,
    /// `ARRAY[...]` or a nested `[...]`.
    ArrayExpr,
    /// `ARRAY(select)`.
    ArraySubquery,
    /// `CASE ... END`.
    CaseExpr,
    /// `WHEN cond THEN result`.
    CaseWhen,
    /// `ELSE result`.
    CaseElse,
    /// A function call.
    FuncCall,
    /// A possibly qualified function name.
    FuncName,
    /// A named argument `name => value` or `name := value`.
    NamedArg,
    /// `WITHIN GROUP (ORDER BY ...)`.
    WithinGroup,
    /// `FILTER (WHERE ...)`.
    FilterClause,
    /// `OVER name` or `OVER (spec)`.
    OverClause,
    /// A function with dedicated syntax.
    SpecialFunction(SpecialFunction),
    /// `DEFAULT` in a value position.
    DefaultExpr,
    /// A comma-separated list of expressions.
    ExprList,
    /// `OPERATOR(schema.op)`.
    QualifiedOperator,
    /// `name AS label` inside `XMLATTRIBUTES`/`XMLFOREST`.
    XmlAttribute,
    /// `XMLATTRIBUTES (...)`.
    XmlAttributes,

    // Types
    /// A complete type name, with `SETOF` and array bounds.
    TypeName,
    /// A user-defined or built-in type referenced by name.
    GenericType,
    /// `INT`, `NUMERIC(p, s)`, `DOUBLE PRECISION`, ...
    NumericType,
    /// `BIT [VARYING] [(n)]`.
    BitType,
    /// `CHARACTER [VARYING] [(n)]` and friends.
    CharacterType,
    /// `TIME`/`TIMESTAMP [(p)] [WITH|WITHOUT TIME ZONE]`.
    DateTimeType,
    /// `INTERVAL [fields] [(p)]`.
    IntervalType,
    /// `YEAR TO MONTH`, `SECOND(3)`, ...
    IntervalFields,
    /// `(expr, ...)` modifiers after a type name.
    TypeModifiers,
    /// `[]`, `[n]` or `ARRAY [n]`.
    ArrayBounds,

    // Names
    /// A dotted name such as `schema.table`.
    QualifiedName,
    /// A comma-separated list of names.
    NameList,
}

impl Rule {
    /// Returns true for rules that produce a value expression.
    #[must_use]
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            Self::Expr(_)
                | Self::TypeCast
                | Self::ColumnRef
                | Self::Indirection
                | Self::Const(_)
                | Self::TypedLiteral
                | Self::Param
                | Self::ParenExpr
                | Self::Row(_)
                | Self::ScalarSubquery
                | Self::Exists
                | Self::ArrayExpr
                | Self::ArraySubquery
                | Self::CaseExpr
                | Self::FuncCall
                | Self::SpecialFunction(_)
                | Self::DefaultExpr
        )
    }

    /// Returns true for statement rules.
    #[must_use]
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            Self::SelectStmt
                | Self::InsertStmt
                | Self::UpdateStmt
                | Self::DeleteStmt
                | Self::CopyStmt
                | Self::LockStmt
                | Self::DoStmt
                | Self::CheckpointStmt
                | Self::FetchStmt
                | Self::VariableSetStmt
                | Self::VariableResetStmt
                | Self::CreateTableStmt
                | Self::CreateIndexStmt
                | Self::CreateViewStmt
                | Self::CreateDatabaseStmt
                | Self::AlterTableStmt
                | Self::AlterIndexStmt
                | Self::DropTableStmt
                | Self::DropIndexStmt
                | Self::DropViewStmt
                | Self::DropDatabaseStmt
                | Self::TruncateStmt
        )
    }
}

/// The alternative of an operator expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprForm {
    /// `left op right`.
    Binary(BinaryOp),
    /// `op operand`.
    Prefix(PrefixOp),
    /// `operand op`.
    Postfix,
    /// `x [NOT] BETWEEN [ASYMMETRIC|SYMMETRIC] low AND high`.
    Between {
        /// `NOT BETWEEN`.
        negated: bool,
        /// The symmetry mode.
        mode: BetweenMode,
    },
    /// `x [NOT] IN (list | select)`.
    In {
        /// `NOT IN`.
        negated: bool,
    },
    /// `x [NOT] LIKE|ILIKE|SIMILAR TO pattern [ESCAPE e]`.
    Pattern {
        /// The pattern operator.
        op: PatternOp,
        /// Negated form.
        negated: bool,
    },
    /// `x op ANY|SOME|ALL (...)`.
    Quantified {
        /// The quantifier keyword.
        quantifier: SubqueryQuantifier,
    },
    /// `x IS [NOT] NULL|TRUE|...`, `ISNULL`, `NOTNULL`.
    IsTest {
        /// The tested property.
        test: IsTestKind,
        /// `IS NOT` or `NOTNULL`.
        negated: bool,
    },
    /// `x IS [NOT] DISTINCT FROM y`.
    DistinctFrom {
        /// `IS NOT DISTINCT FROM`.
        negated: bool,
    },
    /// `x IS [NOT] OF (types)`.
    IsOf {
        /// `IS NOT OF`.
        negated: bool,
    },
    /// `x AT TIME ZONE zone`.
    AtTimeZone,
    /// `x COLLATE name`.
    Collate,
    /// `row OVERLAPS row`.
    Overlaps,
    /// `UNIQUE (select)`.
    Unique,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `OR`
    Or,
    /// `AND`
    And,
    /// `=`
    Eq,
    /// `<>` or `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Exp,
    /// `||`
    Concat,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `#`
    BitXor,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `~`
    RegexMatch,
    /// `~*`
    RegexIMatch,
    /// `!~`
    NotRegexMatch,
    /// `!~*`
    NotRegexIMatch,
    /// `~~`
    Like,
    /// `!~~`
    NotLike,
    /// `~~*`
    ILike,
    /// `!~~*`
    NotILike,
    /// `->`
    JsonExtract,
    /// `->>`
    JsonExtractText,
    /// `#>`
    JsonPathExtract,
    /// `#>>`
    JsonPathExtractText,
    /// `@>`
    JsonbContains,
    /// `<@`
    JsonbContainedBy,
    /// `?`
    JsonbHasKey,
    /// `?|`
    JsonbHasAnyKey,
    /// `?&`
    JsonbHasAllKeys,
    /// `#-`
    JsonbDeletePath,
    /// `@?`
    JsonbPathExists,
    /// `@@`
    JsonbPathMatch,
    /// Any other operator, including `OPERATOR(schema.op)`.
    Custom,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    /// `NOT`
    Not,
    /// Unary `-`
    Minus,
    /// Unary `+`
    Plus,
    /// Any other prefix operator (`~`, `@`, `|/`, ...).
    Custom,
}

/// `BETWEEN` symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetweenMode {
    /// Neither keyword written.
    Default,
    /// `ASYMMETRIC`
    Asymmetric,
    /// `SYMMETRIC`
    Symmetric,
}

/// Pattern-matching operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternOp {
    /// `LIKE`
    Like,
    /// `ILIKE`
    ILike,
    /// `SIMILAR TO`
    SimilarTo,
}

/// Quantifiers of `op ANY|SOME|ALL (...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubqueryQuantifier {
    /// `ANY`
    Any,
    /// `SOME`
    Some,
    /// `ALL`
    All,
}

/// The property tested by `IS [NOT] ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsTestKind {
    /// `NULL`, `ISNULL`, `NOTNULL`
    Null,
    /// `TRUE`
    True,
    /// `FALSE`
    False,
    /// `UNKNOWN`
    Unknown,
    /// `DOCUMENT`
    Document,
    /// `[form] NORMALIZED`
    Normalized,
}

/// Set operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// `UNION`
    Union,
    /// `INTERSECT`
    Intersect,
    /// `EXCEPT`
    Except,
    /// `MINUS`, the openGauss spelling of `EXCEPT`.
    Minus,
}

/// `ALL` or `DISTINCT` after a set operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetQuantifier {
    /// `ALL`
    All,
    /// `DISTINCT`
    Distinct,
}

/// Kinds of non-join `FROM` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRefKind {
    /// A table or view.
    Relation,
    /// A set-returning function call.
    Function,
    /// `ROWS FROM (...)`.
    RowsFrom,
    /// A parenthesized select.
    Subquery,
    /// A parenthesized join.
    Parenthesized,
    /// `XMLTABLE (...)`.
    XmlTable,
}

/// Join types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// `CROSS JOIN`
    Cross,
    /// `[INNER] JOIN`
    Inner,
    /// `LEFT [OUTER] JOIN`
    Left,
    /// `RIGHT [OUTER] JOIN`
    Right,
    /// `FULL [OUTER] JOIN`
    Full,
}

/// Window frame units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameUnit {
    /// `RANGE`
    Range,
    /// `ROWS`
    Rows,
    /// `GROUPS`
    Groups,
}

/// Window frame boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameBoundKind {
    /// `UNBOUNDED PRECEDING`
    UnboundedPreceding,
    /// `UNBOUNDED FOLLOWING`
    UnboundedFollowing,
    /// `CURRENT ROW`
    CurrentRow,
    /// `expr PRECEDING`
    Preceding,
    /// `expr FOLLOWING`
    Following,
}

/// Indirection steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndirectionKind {
    /// `.field`
    Field,
    /// `.*`
    Star,
    /// `[i]`
    Subscript,
    /// `[a:b]`, with either bound optional.
    Slice,
}

/// Literal constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstKind {
    /// An integer.
    Integer,
    /// A decimal or exponent number.
    Decimal,
    /// Any character string literal.
    String,
    /// `B'...'` or `X'...'`.
    BitString,
    /// `TRUE` or `FALSE`.
    Boolean,
    /// `NULL`.
    Null,
}

/// Row constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// `ROW(...)`
    Explicit,
    /// `(a, b, ...)`
    Implicit,
}

/// `ON CONFLICT` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictActionKind {
    /// `DO NOTHING`
    Nothing,
    /// `DO UPDATE SET ...`
    Update,
}

/// Functions with dedicated syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialFunction {
    /// `EXTRACT(field FROM expr)`
    Extract,
    /// `NORMALIZE(expr [, form])`
    Normalize,
    /// `OVERLAY(expr PLACING expr FROM expr [FOR expr])`
    Overlay,
    /// `POSITION(expr IN expr)`
    Position,
    /// `SUBSTRING(expr FROM ... FOR ...)`
    Substring,
    /// `TREAT(expr AS type)`
    Treat,
    /// `TRIM([BOTH|LEADING|TRAILING] ...)`
    Trim,
    /// `NULLIF(a, b)`
    NullIf,
    /// `COALESCE(...)`
    Coalesce,
    /// `GREATEST(...)`
    Greatest,
    /// `LEAST(...)`
    Least,
    /// `COLLATION FOR (expr)`
    CollationFor,
    /// `GROUPING(...)`
    Grouping,
    /// `CURRENT_DATE`
    CurrentDate,
    /// `CURRENT_TIME [(p)]`
    CurrentTime,
    /// `CURRENT_TIMESTAMP [(p)]`
    CurrentTimestamp,
    /// `LOCALTIME [(p)]`
    LocalTime,
    /// `LOCALTIMESTAMP [(p)]`
    LocalTimestamp,
    /// `CURRENT_ROLE`
    CurrentRole,
    /// `CURRENT_USER`
    CurrentUser,
    /// `SESSION_USER`
    SessionUser,
    /// `USER`
    User,
    /// `CURRENT_CATALOG`
    CurrentCatalog,
    /// `CURRENT_SCHEMA`
    CurrentSchema,
    /// `XMLCONCAT(...)`
    XmlConcat,
    /// `XMLELEMENT(NAME n, ...)`
    XmlElement,
    /// `XMLEXISTS(path PASSING doc)`
    XmlExists,
    /// `XMLFOREST(...)`
    XmlForest,
    /// `XMLPARSE(DOCUMENT|CONTENT expr)`
    XmlParse,
    /// `XMLPI(NAME n [, expr])`
    XmlPi,
    /// `XMLROOT(expr, VERSION ...)`
    XmlRoot,
    /// `XMLSERIALIZE(DOCUMENT|CONTENT expr AS type)`
    XmlSerialize,
    /// openGauss `SYSDATE`.
    SysDate,
    /// openGauss `ROWNUM`.
    RowNum,
}
