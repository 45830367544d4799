//! Keyword definitions and keyword classes.
//!
//! Every identifier-shaped token belongs to exactly one [`KeywordClass`].
//! The class decides where the word may appear as a bare name: reserved
//! words never can, column-name keywords may name columns but not
//! functions, and type/function-name keywords may name functions and types
//! but not columns.

use std::collections::HashMap;

use serde::Serialize;

/// Classification of an identifier-shaped token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeywordClass {
    /// Reserved keyword; only usable as a label after `AS` or `.`.
    Reserved,
    /// Unreserved keyword; usable anywhere a name is expected.
    Unreserved,
    /// Usable as a type or function name, not as a column name.
    TypeFuncName,
    /// Usable as a column name, not as a function or type name.
    ColumnName,
    /// Not a keyword at all.
    PlainIdentifier,
}

impl KeywordClass {
    /// `ColId`: names of columns, tables, schemas and aliases.
    #[must_use]
    pub const fn is_col_id(self) -> bool {
        matches!(
            self,
            Self::PlainIdentifier | Self::Unreserved | Self::ColumnName
        )
    }

    /// `type_function_name`: names of functions and types.
    #[must_use]
    pub const fn is_type_function_name(self) -> bool {
        matches!(
            self,
            Self::PlainIdentifier | Self::Unreserved | Self::TypeFuncName
        )
    }

    /// `NonReservedWord`: everything except reserved keywords.
    #[must_use]
    pub const fn is_non_reserved(self) -> bool {
        !matches!(self, Self::Reserved)
    }

    /// `ColLabel`: any identifier-shaped token.
    #[must_use]
    pub const fn is_col_label(self) -> bool {
        true
    }

    /// Returns a short human-readable label, used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Reserved => "reserved keyword",
            Self::Unreserved => "unreserved keyword",
            Self::TypeFuncName => "type or function name keyword",
            Self::ColumnName => "column-name keyword",
            Self::PlainIdentifier => "identifier",
        }
    }
}

macro_rules! keyword_class {
    (Extension) => {
        None
    };
    ($class:ident) => {
        Some(KeywordClass::$class)
    };
}

macro_rules! define_keywords {
    ($($variant:ident = $text:literal, $class:ident;)*) => {
        /// Keywords known to at least one supported dialect.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $(
                #[doc = $text]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in alphabetical order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the canonical upper-case spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }

            /// Returns the PostgreSQL classification, or `None` for words
            /// that only another dialect treats as keywords.
            #[must_use]
            pub const fn postgres_class(self) -> Option<KeywordClass> {
                match self {
                    $(Self::$variant => keyword_class!($class),)*
                }
            }
        }
    };
}

define_keywords! {
    Abort = "ABORT", Unreserved;
    Absolute = "ABSOLUTE", Unreserved;
    Access = "ACCESS", Unreserved;
    Action = "ACTION", Unreserved;
    Add = "ADD", Unreserved;
    Admin = "ADMIN", Unreserved;
    After = "AFTER", Unreserved;
    Aggregate = "AGGREGATE", Unreserved;
    All = "ALL", Reserved;
    Also = "ALSO", Unreserved;
    Alter = "ALTER", Unreserved;
    Always = "ALWAYS", Unreserved;
    Analyse = "ANALYSE", Reserved;
    Analyze = "ANALYZE", Reserved;
    And = "AND", Reserved;
    Any = "ANY", Reserved;
    Array = "ARRAY", Reserved;
    As = "AS", Reserved;
    Asc = "ASC", Reserved;
    Assertion = "ASSERTION", Unreserved;
    Assignment = "ASSIGNMENT", Unreserved;
    Asymmetric = "ASYMMETRIC", Reserved;
    At = "AT", Unreserved;
    Attach = "ATTACH", Unreserved;
    Attribute = "ATTRIBUTE", Unreserved;
    Authorization = "AUTHORIZATION", TypeFuncName;
    Backward = "BACKWARD", Unreserved;
    Before = "BEFORE", Unreserved;
    Begin = "BEGIN", Unreserved;
    Between = "BETWEEN", ColumnName;
    BigInt = "BIGINT", ColumnName;
    Binary = "BINARY", TypeFuncName;
    Bit = "BIT", ColumnName;
    Boolean = "BOOLEAN", ColumnName;
    Both = "BOTH", Reserved;
    By = "BY", Unreserved;
    Cache = "CACHE", Unreserved;
    Call = "CALL", Unreserved;
    Called = "CALLED", Unreserved;
    Cascade = "CASCADE", Unreserved;
    Cascaded = "CASCADED", Unreserved;
    Case = "CASE", Reserved;
    Cast = "CAST", Reserved;
    Catalog = "CATALOG", Unreserved;
    Chain = "CHAIN", Unreserved;
    Char = "CHAR", ColumnName;
    Character = "CHARACTER", ColumnName;
    Characteristics = "CHARACTERISTICS", Unreserved;
    Check = "CHECK", Reserved;
    Checkpoint = "CHECKPOINT", Unreserved;
    Class = "CLASS", Unreserved;
    Close = "CLOSE", Unreserved;
    Cluster = "CLUSTER", Unreserved;
    Coalesce = "COALESCE", ColumnName;
    Collate = "COLLATE", Reserved;
    Collation = "COLLATION", TypeFuncName;
    Column = "COLUMN", Reserved;
    Columns = "COLUMNS", Unreserved;
    Comment = "COMMENT", Unreserved;
    Comments = "COMMENTS", Unreserved;
    Commit = "COMMIT", Unreserved;
    Committed = "COMMITTED", Unreserved;
    Concurrently = "CONCURRENTLY", TypeFuncName;
    Configuration = "CONFIGURATION", Unreserved;
    Conflict = "CONFLICT", Unreserved;
    Connection = "CONNECTION", Unreserved;
    Constraint = "CONSTRAINT", Reserved;
    Constraints = "CONSTRAINTS", Unreserved;
    Content = "CONTENT", Unreserved;
    Continue = "CONTINUE", Unreserved;
    Conversion = "CONVERSION", Unreserved;
    Copy = "COPY", Unreserved;
    Cost = "COST", Unreserved;
    Create = "CREATE", Reserved;
    Cross = "CROSS", TypeFuncName;
    Csv = "CSV", Unreserved;
    Cube = "CUBE", Unreserved;
    Current = "CURRENT", Unreserved;
    CurrentCatalog = "CURRENT_CATALOG", Reserved;
    CurrentDate = "CURRENT_DATE", Reserved;
    CurrentRole = "CURRENT_ROLE", Reserved;
    CurrentSchema = "CURRENT_SCHEMA", TypeFuncName;
    CurrentTime = "CURRENT_TIME", Reserved;
    CurrentTimestamp = "CURRENT_TIMESTAMP", Reserved;
    CurrentUser = "CURRENT_USER", Reserved;
    Cursor = "CURSOR", Unreserved;
    Cycle = "CYCLE", Unreserved;
    Data = "DATA", Unreserved;
    Database = "DATABASE", Unreserved;
    Day = "DAY", Unreserved;
    Deallocate = "DEALLOCATE", Unreserved;
    Dec = "DEC", ColumnName;
    Decimal = "DECIMAL", ColumnName;
    Declare = "DECLARE", Unreserved;
    Default = "DEFAULT", Reserved;
    Defaults = "DEFAULTS", Unreserved;
    Deferrable = "DEFERRABLE", Reserved;
    Deferred = "DEFERRED", Unreserved;
    Definer = "DEFINER", Unreserved;
    Delete = "DELETE", Unreserved;
    Delimiter = "DELIMITER", Unreserved;
    Delimiters = "DELIMITERS", Unreserved;
    Depends = "DEPENDS", Unreserved;
    Desc = "DESC", Reserved;
    Detach = "DETACH", Unreserved;
    Dictionary = "DICTIONARY", Unreserved;
    Disable = "DISABLE", Unreserved;
    Discard = "DISCARD", Unreserved;
    Distinct = "DISTINCT", Reserved;
    Do = "DO", Reserved;
    Document = "DOCUMENT", Unreserved;
    Domain = "DOMAIN", Unreserved;
    Double = "DOUBLE", Unreserved;
    Drop = "DROP", Unreserved;
    Each = "EACH", Unreserved;
    Else = "ELSE", Reserved;
    Enable = "ENABLE", Unreserved;
    Encoding = "ENCODING", Unreserved;
    Encrypted = "ENCRYPTED", Unreserved;
    End = "END", Reserved;
    Enum = "ENUM", Unreserved;
    Escape = "ESCAPE", Unreserved;
    Event = "EVENT", Unreserved;
    Except = "EXCEPT", Reserved;
    Exclude = "EXCLUDE", Unreserved;
    Excluding = "EXCLUDING", Unreserved;
    Exclusive = "EXCLUSIVE", Unreserved;
    Execute = "EXECUTE", Unreserved;
    Exists = "EXISTS", ColumnName;
    Explain = "EXPLAIN", Unreserved;
    Expression = "EXPRESSION", Unreserved;
    Extension = "EXTENSION", Unreserved;
    External = "EXTERNAL", Unreserved;
    Extract = "EXTRACT", ColumnName;
    False = "FALSE", Reserved;
    Family = "FAMILY", Unreserved;
    Fetch = "FETCH", Reserved;
    Filter = "FILTER", Unreserved;
    First = "FIRST", Unreserved;
    Float = "FLOAT", ColumnName;
    Following = "FOLLOWING", Unreserved;
    For = "FOR", Reserved;
    Force = "FORCE", Unreserved;
    Foreign = "FOREIGN", Reserved;
    Forward = "FORWARD", Unreserved;
    Freeze = "FREEZE", TypeFuncName;
    From = "FROM", Reserved;
    Full = "FULL", TypeFuncName;
    Function = "FUNCTION", Unreserved;
    Functions = "FUNCTIONS", Unreserved;
    Generated = "GENERATED", Unreserved;
    Global = "GLOBAL", Unreserved;
    Grant = "GRANT", Reserved;
    Granted = "GRANTED", Unreserved;
    Greatest = "GREATEST", ColumnName;
    Group = "GROUP", Reserved;
    Grouping = "GROUPING", ColumnName;
    Groups = "GROUPS", Unreserved;
    Handler = "HANDLER", Unreserved;
    Hash = "HASH", Unreserved;
    Having = "HAVING", Reserved;
    Header = "HEADER", Unreserved;
    Hold = "HOLD", Unreserved;
    Hour = "HOUR", Unreserved;
    Identity = "IDENTITY", Unreserved;
    If = "IF", Unreserved;
    ILike = "ILIKE", TypeFuncName;
    Immediate = "IMMEDIATE", Unreserved;
    Immutable = "IMMUTABLE", Unreserved;
    Implicit = "IMPLICIT", Unreserved;
    Import = "IMPORT", Unreserved;
    In = "IN", Reserved;
    Include = "INCLUDE", Unreserved;
    Including = "INCLUDING", Unreserved;
    Increment = "INCREMENT", Unreserved;
    Index = "INDEX", Unreserved;
    Indexes = "INDEXES", Unreserved;
    Inherit = "INHERIT", Unreserved;
    Inherits = "INHERITS", Unreserved;
    Initially = "INITIALLY", Reserved;
    Inline = "INLINE", Unreserved;
    Inner = "INNER", TypeFuncName;
    Inout = "INOUT", ColumnName;
    Input = "INPUT", Unreserved;
    Insensitive = "INSENSITIVE", Unreserved;
    Insert = "INSERT", Unreserved;
    Instead = "INSTEAD", Unreserved;
    Int = "INT", ColumnName;
    Integer = "INTEGER", ColumnName;
    Intersect = "INTERSECT", Reserved;
    Interval = "INTERVAL", ColumnName;
    Into = "INTO", Reserved;
    Invoker = "INVOKER", Unreserved;
    Is = "IS", TypeFuncName;
    IsNull = "ISNULL", TypeFuncName;
    Isolation = "ISOLATION", Unreserved;
    Join = "JOIN", TypeFuncName;
    Key = "KEY", Unreserved;
    Label = "LABEL", Unreserved;
    Language = "LANGUAGE", Unreserved;
    Large = "LARGE", Unreserved;
    Last = "LAST", Unreserved;
    Lateral = "LATERAL", Reserved;
    Leading = "LEADING", Reserved;
    Leakproof = "LEAKPROOF", Unreserved;
    Least = "LEAST", ColumnName;
    Left = "LEFT", TypeFuncName;
    Level = "LEVEL", Unreserved;
    Like = "LIKE", TypeFuncName;
    Limit = "LIMIT", Reserved;
    List = "LIST", Unreserved;
    Listen = "LISTEN", Unreserved;
    Load = "LOAD", Unreserved;
    Local = "LOCAL", Unreserved;
    LocalTime = "LOCALTIME", Reserved;
    LocalTimestamp = "LOCALTIMESTAMP", Reserved;
    Location = "LOCATION", Unreserved;
    Lock = "LOCK", Unreserved;
    Locked = "LOCKED", Unreserved;
    Logged = "LOGGED", Unreserved;
    Mapping = "MAPPING", Unreserved;
    Match = "MATCH", Unreserved;
    Materialized = "MATERIALIZED", Unreserved;
    MaxValue = "MAXVALUE", Unreserved;
    Method = "METHOD", Unreserved;
    Minus = "MINUS", Extension;
    Minute = "MINUTE", Unreserved;
    MinValue = "MINVALUE", Unreserved;
    Mode = "MODE", Unreserved;
    Month = "MONTH", Unreserved;
    Move = "MOVE", Unreserved;
    Name = "NAME", Unreserved;
    Names = "NAMES", Unreserved;
    National = "NATIONAL", ColumnName;
    Natural = "NATURAL", TypeFuncName;
    NChar = "NCHAR", ColumnName;
    New = "NEW", Unreserved;
    Next = "NEXT", Unreserved;
    Nfc = "NFC", Unreserved;
    Nfd = "NFD", Unreserved;
    Nfkc = "NFKC", Unreserved;
    Nfkd = "NFKD", Unreserved;
    No = "NO", Unreserved;
    None = "NONE", ColumnName;
    Normalize = "NORMALIZE", ColumnName;
    Normalized = "NORMALIZED", Unreserved;
    Not = "NOT", Reserved;
    Nothing = "NOTHING", Unreserved;
    Notify = "NOTIFY", Unreserved;
    NotNull = "NOTNULL", TypeFuncName;
    NoWait = "NOWAIT", Unreserved;
    Null = "NULL", Reserved;
    NullIf = "NULLIF", ColumnName;
    Nulls = "NULLS", Unreserved;
    Numeric = "NUMERIC", ColumnName;
    Object = "OBJECT", Unreserved;
    Of = "OF", Unreserved;
    Off = "OFF", Unreserved;
    Offset = "OFFSET", Reserved;
    Oids = "OIDS", Unreserved;
    Old = "OLD", Unreserved;
    On = "ON", Reserved;
    Only = "ONLY", Reserved;
    Operator = "OPERATOR", Unreserved;
    Option = "OPTION", Unreserved;
    Options = "OPTIONS", Unreserved;
    Or = "OR", Reserved;
    Order = "ORDER", Reserved;
    Ordinality = "ORDINALITY", Unreserved;
    Others = "OTHERS", Unreserved;
    Out = "OUT", ColumnName;
    Outer = "OUTER", TypeFuncName;
    Over = "OVER", Unreserved;
    Overlaps = "OVERLAPS", TypeFuncName;
    Overlay = "OVERLAY", ColumnName;
    Overriding = "OVERRIDING", Unreserved;
    Owned = "OWNED", Unreserved;
    Owner = "OWNER", Unreserved;
    Parallel = "PARALLEL", Unreserved;
    Parser = "PARSER", Unreserved;
    Partial = "PARTIAL", Unreserved;
    Partition = "PARTITION", Unreserved;
    Passing = "PASSING", Unreserved;
    Password = "PASSWORD", Unreserved;
    Path = "PATH", Unreserved;
    Placing = "PLACING", Reserved;
    Plans = "PLANS", Unreserved;
    Policy = "POLICY", Unreserved;
    Position = "POSITION", ColumnName;
    Preceding = "PRECEDING", Unreserved;
    Precision = "PRECISION", ColumnName;
    Prepare = "PREPARE", Unreserved;
    Prepared = "PREPARED", Unreserved;
    Preserve = "PRESERVE", Unreserved;
    Primary = "PRIMARY", Reserved;
    Prior = "PRIOR", Unreserved;
    Privileges = "PRIVILEGES", Unreserved;
    Procedural = "PROCEDURAL", Unreserved;
    Procedure = "PROCEDURE", Unreserved;
    Procedures = "PROCEDURES", Unreserved;
    Program = "PROGRAM", Unreserved;
    Publication = "PUBLICATION", Unreserved;
    Quote = "QUOTE", Unreserved;
    Range = "RANGE", Unreserved;
    Read = "READ", Unreserved;
    Real = "REAL", ColumnName;
    Reassign = "REASSIGN", Unreserved;
    Recheck = "RECHECK", Unreserved;
    Recursive = "RECURSIVE", Unreserved;
    Ref = "REF", Unreserved;
    References = "REFERENCES", Reserved;
    Referencing = "REFERENCING", Unreserved;
    Refresh = "REFRESH", Unreserved;
    Reindex = "REINDEX", Unreserved;
    Relative = "RELATIVE", Unreserved;
    Release = "RELEASE", Unreserved;
    Rename = "RENAME", Unreserved;
    Repeatable = "REPEATABLE", Unreserved;
    Replace = "REPLACE", Unreserved;
    Replica = "REPLICA", Unreserved;
    Reset = "RESET", Unreserved;
    Restart = "RESTART", Unreserved;
    Restrict = "RESTRICT", Unreserved;
    Returning = "RETURNING", Reserved;
    Returns = "RETURNS", Unreserved;
    Revoke = "REVOKE", Unreserved;
    Right = "RIGHT", TypeFuncName;
    Role = "ROLE", Unreserved;
    Rollback = "ROLLBACK", Unreserved;
    Rollup = "ROLLUP", Unreserved;
    Routine = "ROUTINE", Unreserved;
    Routines = "ROUTINES", Unreserved;
    Row = "ROW", ColumnName;
    RowNum = "ROWNUM", Extension;
    Rows = "ROWS", Unreserved;
    Rule = "RULE", Unreserved;
    Savepoint = "SAVEPOINT", Unreserved;
    Schema = "SCHEMA", Unreserved;
    Schemas = "SCHEMAS", Unreserved;
    Scroll = "SCROLL", Unreserved;
    Search = "SEARCH", Unreserved;
    Second = "SECOND", Unreserved;
    Security = "SECURITY", Unreserved;
    Select = "SELECT", Reserved;
    Sequence = "SEQUENCE", Unreserved;
    Sequences = "SEQUENCES", Unreserved;
    Serializable = "SERIALIZABLE", Unreserved;
    Server = "SERVER", Unreserved;
    Session = "SESSION", Unreserved;
    SessionUser = "SESSION_USER", Reserved;
    Set = "SET", Unreserved;
    SetOf = "SETOF", ColumnName;
    Sets = "SETS", Unreserved;
    Share = "SHARE", Unreserved;
    Show = "SHOW", Unreserved;
    Similar = "SIMILAR", TypeFuncName;
    Simple = "SIMPLE", Unreserved;
    Skip = "SKIP", Unreserved;
    SmallInt = "SMALLINT", ColumnName;
    Snapshot = "SNAPSHOT", Unreserved;
    Some = "SOME", Reserved;
    Sql = "SQL", Unreserved;
    Stable = "STABLE", Unreserved;
    Standalone = "STANDALONE", Unreserved;
    Start = "START", Unreserved;
    Statement = "STATEMENT", Unreserved;
    Statistics = "STATISTICS", Unreserved;
    Stdin = "STDIN", Unreserved;
    Stdout = "STDOUT", Unreserved;
    Storage = "STORAGE", Unreserved;
    Stored = "STORED", Unreserved;
    Strict = "STRICT", Unreserved;
    Strip = "STRIP", Unreserved;
    Subscription = "SUBSCRIPTION", Unreserved;
    Substring = "SUBSTRING", ColumnName;
    Support = "SUPPORT", Unreserved;
    Symmetric = "SYMMETRIC", Reserved;
    SysDate = "SYSDATE", Extension;
    SysId = "SYSID", Unreserved;
    System = "SYSTEM", Unreserved;
    Table = "TABLE", Reserved;
    Tables = "TABLES", Unreserved;
    TableSample = "TABLESAMPLE", TypeFuncName;
    Tablespace = "TABLESPACE", Unreserved;
    Temp = "TEMP", Unreserved;
    Template = "TEMPLATE", Unreserved;
    Temporary = "TEMPORARY", Unreserved;
    Text = "TEXT", Unreserved;
    Then = "THEN", Reserved;
    Ties = "TIES", Unreserved;
    Time = "TIME", ColumnName;
    Timestamp = "TIMESTAMP", ColumnName;
    To = "TO", Reserved;
    Trailing = "TRAILING", Reserved;
    Transaction = "TRANSACTION", Unreserved;
    Transform = "TRANSFORM", Unreserved;
    Treat = "TREAT", ColumnName;
    Trigger = "TRIGGER", Unreserved;
    Trim = "TRIM", ColumnName;
    True = "TRUE", Reserved;
    Truncate = "TRUNCATE", Unreserved;
    Trusted = "TRUSTED", Unreserved;
    Type = "TYPE", Unreserved;
    Types = "TYPES", Unreserved;
    UEscape = "UESCAPE", Unreserved;
    Unbounded = "UNBOUNDED", Unreserved;
    Uncommitted = "UNCOMMITTED", Unreserved;
    Unencrypted = "UNENCRYPTED", Unreserved;
    Union = "UNION", Reserved;
    Unique = "UNIQUE", Reserved;
    Unknown = "UNKNOWN", Unreserved;
    Unlisten = "UNLISTEN", Unreserved;
    Unlogged = "UNLOGGED", Unreserved;
    Until = "UNTIL", Unreserved;
    Update = "UPDATE", Unreserved;
    User = "USER", Reserved;
    Using = "USING", Reserved;
    Vacuum = "VACUUM", Unreserved;
    Valid = "VALID", Unreserved;
    Validate = "VALIDATE", Unreserved;
    Validator = "VALIDATOR", Unreserved;
    Value = "VALUE", Unreserved;
    Values = "VALUES", ColumnName;
    VarChar = "VARCHAR", ColumnName;
    Variadic = "VARIADIC", Reserved;
    Varying = "VARYING", Unreserved;
    Verbose = "VERBOSE", TypeFuncName;
    Version = "VERSION", Unreserved;
    View = "VIEW", Unreserved;
    Views = "VIEWS", Unreserved;
    Volatile = "VOLATILE", Unreserved;
    When = "WHEN", Reserved;
    Where = "WHERE", Reserved;
    Whitespace = "WHITESPACE", Unreserved;
    Window = "WINDOW", Reserved;
    With = "WITH", Reserved;
    Within = "WITHIN", Unreserved;
    Without = "WITHOUT", Unreserved;
    Work = "WORK", Unreserved;
    Wrapper = "WRAPPER", Unreserved;
    Write = "WRITE", Unreserved;
    Xml = "XML", Unreserved;
    XmlAttributes = "XMLATTRIBUTES", ColumnName;
    XmlConcat = "XMLCONCAT", ColumnName;
    XmlElement = "XMLELEMENT", ColumnName;
    XmlExists = "XMLEXISTS", ColumnName;
    XmlForest = "XMLFOREST", ColumnName;
    XmlNamespaces = "XMLNAMESPACES", ColumnName;
    XmlParse = "XMLPARSE", ColumnName;
    XmlPi = "XMLPI", ColumnName;
    XmlRoot = "XMLROOT", ColumnName;
    XmlSerialize = "XMLSERIALIZE", ColumnName;
    XmlTable = "XMLTABLE", ColumnName;
    Year = "YEAR", Unreserved;
    Yes = "YES", Unreserved;
    Zone = "ZONE", Unreserved;
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Longest keyword spelling; longer words skip the lookup.
const MAX_KEYWORD_LEN: usize = 24;

/// Case-insensitive mapping from spelling to keyword and class.
///
/// A dialect owns one table, built once and shared read-only by every
/// parse.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    words: HashMap<&'static str, (Keyword, KeywordClass)>,
}

impl KeywordTable {
    /// Builds a table from explicit entries.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (Keyword, KeywordClass)>) -> Self {
        let words = entries
            .into_iter()
            .map(|(keyword, class)| (keyword.as_str(), (keyword, class)))
            .collect();
        Self { words }
    }

    /// Builds the PostgreSQL table.
    #[must_use]
    pub fn postgres() -> Self {
        Self::from_entries(
            Keyword::ALL
                .iter()
                .filter_map(|&kw| kw.postgres_class().map(|class| (kw, class))),
        )
    }

    /// Returns a copy with `keyword` added or reclassified.
    #[must_use]
    pub fn with(mut self, keyword: Keyword, class: KeywordClass) -> Self {
        self.words.insert(keyword.as_str(), (keyword, class));
        self
    }

    /// Looks up a word case-insensitively.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<(Keyword, KeywordClass)> {
        if word.len() > MAX_KEYWORD_LEN || !word.is_ascii() {
            return None;
        }
        let mut buf = [0_u8; MAX_KEYWORD_LEN];
        let upper = &mut buf[..word.len()];
        upper.copy_from_slice(word.as_bytes());
        upper.make_ascii_uppercase();
        let upper = std::str::from_utf8(upper).ok()?;
        self.words.get(upper).copied()
    }

    /// Returns the class of a keyword, or `None` when this dialect does not
    /// treat it as a keyword.
    #[must_use]
    pub fn class_of(&self, keyword: Keyword) -> Option<KeywordClass> {
        self.words.get(keyword.as_str()).map(|&(_, class)| class)
    }

    /// Number of keywords in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over all keywords with their class, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Keyword, KeywordClass)> + '_ {
        self.words.values().copied()
    }
}
