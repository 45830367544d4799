//! Data definition statements: `CREATE`, `ALTER` and `DROP` for tables,
//! indexes, views and databases, and `TRUNCATE`.

use super::parser::{PResult, Parser};
use crate::lexer::{Keyword, TokenKind};
use crate::tree::Rule;

/// Words that may sit between `CREATE` and the object type.
const CREATE_MODIFIERS: &[Keyword] = &[
    Keyword::Or,
    Keyword::Replace,
    Keyword::Global,
    Keyword::Local,
    Keyword::Temp,
    Keyword::Temporary,
    Keyword::Unlogged,
    Keyword::Recursive,
    Keyword::Unique,
];

/// Keywords that open a table constraint.
const TABLE_CONSTRAINT_STARTS: &[Keyword] = &[
    Keyword::Constraint,
    Keyword::Check,
    Keyword::Unique,
    Keyword::Primary,
    Keyword::Foreign,
];

impl Parser<'_> {
    // --- CREATE ---

    /// Dispatches on the object type following `CREATE` and its
    /// modifiers.
    pub(super) fn parse_create_stmt(&mut self) -> PResult {
        let mut k = 1;
        while self
            .peek_keyword(k)
            .is_some_and(|keyword| CREATE_MODIFIERS.contains(&keyword))
        {
            k += 1;
        }
        match self.peek_keyword(k) {
            Some(Keyword::Table) => self.parse_create_table_stmt(),
            Some(Keyword::Index) => self.parse_create_index_stmt(),
            Some(Keyword::View) => self.parse_create_view_stmt(),
            Some(Keyword::Database) => self.parse_create_database_stmt(),
            _ => {
                self.advance_n(k);
                self.expect_labels(&["TABLE", "INDEX", "VIEW", "DATABASE"]);
                Err(self.error_at_current("CREATE statement"))
            }
        }
    }

    /// `CREATE [[GLOBAL|LOCAL] TEMP|UNLOGGED] TABLE [IF NOT EXISTS] name
    /// (elements) [options]` or `... [(cols)] [options] AS query
    /// [WITH [NO] DATA]`.
    fn parse_create_table_stmt(&mut self) -> PResult {
        self.node(Rule::CreateTableStmt, |p| {
            p.advance();
            p.parse_opt_temp()?;
            p.expect_keyword(Keyword::Table, "CREATE TABLE")?;
            p.parse_opt_if_not_exists()?;
            p.parse_qualified_name("table name")?;
            let as_columns = p.peek_kind(0) == TokenKind::LeftParen
                && p.peek_is_col_id(1)
                && matches!(p.peek_kind(2), TokenKind::Comma | TokenKind::RightParen);
            let as_query = as_columns || p.peek_is(0, Keyword::As);
            if as_columns {
                p.parse_paren_name_list("CREATE TABLE AS column list")?;
            } else if !as_query {
                p.parse_table_element_list()?;
                if p.peek_is(0, Keyword::Inherits) {
                    p.node(Rule::InheritClause, |p| {
                        p.advance();
                        p.expect(TokenKind::LeftParen, "INHERITS")?;
                        p.parse_qualified_name_list("parent table")?;
                        p.expect(TokenKind::RightParen, "INHERITS")
                    })?;
                }
                if p.peek_is(0, Keyword::Partition) {
                    p.parse_partition_spec()?;
                }
            }
            if p.eat_keyword(Keyword::Using) {
                p.parse_col_id("access method")?;
            }
            if p.peek_is(0, Keyword::Without) && p.peek_is(1, Keyword::Oids) {
                p.advance_n(2);
            } else {
                p.parse_opt_with_reloptions()?;
            }
            if p.peek_is(0, Keyword::On) && p.peek_is(1, Keyword::Commit) {
                p.parse_on_commit_clause()?;
            }
            p.parse_opt_tablespace()?;
            if as_query {
                p.expect_keyword(Keyword::As, "CREATE TABLE AS")?;
                p.parse_select_stmt()?;
                if p.eat_keyword(Keyword::With) {
                    p.eat_keyword(Keyword::No);
                    p.expect_keyword(Keyword::Data, "WITH DATA")?;
                }
            }
            Ok(())
        })
    }

    /// `[GLOBAL|LOCAL] TEMP|TEMPORARY` or `UNLOGGED`.
    fn parse_opt_temp(&mut self) -> PResult {
        if self.eat_keyword(Keyword::Unlogged) {
            return Ok(());
        }
        let scoped = self.eat_keyword(Keyword::Global) || self.eat_keyword(Keyword::Local);
        if self.eat_keyword(Keyword::Temp) || self.eat_keyword(Keyword::Temporary) || !scoped {
            return Ok(());
        }
        Err(self.error_at_current("temporary table"))
    }

    fn parse_opt_if_not_exists(&mut self) -> PResult {
        if self.peek_is(0, Keyword::If) && self.peek_is(1, Keyword::Not) {
            self.advance_n(2);
            self.expect_keyword(Keyword::Exists, "IF NOT EXISTS")?;
        }
        Ok(())
    }

    fn parse_opt_if_exists(&mut self) {
        if self.peek_is(0, Keyword::If) && self.peek_is(1, Keyword::Exists) {
            self.advance_n(2);
        }
    }

    fn parse_opt_drop_behavior(&mut self) {
        if !self.eat_keyword(Keyword::Cascade) {
            self.eat_keyword(Keyword::Restrict);
        }
    }

    fn parse_opt_tablespace(&mut self) -> PResult {
        if self.eat_keyword(Keyword::Tablespace) {
            self.parse_col_id("tablespace name")?;
        }
        Ok(())
    }

    /// `( element, ... )`, possibly empty.
    fn parse_table_element_list(&mut self) -> PResult {
        self.node(Rule::TableElementList, |p| {
            p.expect(TokenKind::LeftParen, "table definition")?;
            if p.eat(TokenKind::RightParen) {
                return Ok(());
            }
            loop {
                match p.peek_keyword(0) {
                    Some(Keyword::Like) => p.parse_table_like_clause()?,
                    Some(keyword) if TABLE_CONSTRAINT_STARTS.contains(&keyword) => {
                        p.parse_table_constraint()?;
                    }
                    _ => p.parse_column_def()?,
                }
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RightParen, "table definition")
        })
    }

    /// `name type [constraint ...]`.
    fn parse_column_def(&mut self) -> PResult {
        self.node(Rule::ColumnDef, |p| {
            p.parse_col_id("column name")?;
            p.parse_type_name()?;
            loop {
                if p.peek_is_constraint_attr() {
                    p.parse_constraint_attr()?;
                    continue;
                }
                match p.peek_keyword(0) {
                    Some(
                        Keyword::Constraint
                        | Keyword::Not
                        | Keyword::Null
                        | Keyword::Check
                        | Keyword::Default
                        | Keyword::Unique
                        | Keyword::Primary
                        | Keyword::References
                        | Keyword::Generated
                        | Keyword::Collate,
                    ) => p.parse_col_constraint()?,
                    _ => return Ok(()),
                }
            }
        })
    }

    /// `[CONSTRAINT name]` followed by one column constraint.
    fn parse_col_constraint(&mut self) -> PResult {
        const CONSTRUCT: &str = "column constraint";
        self.node(Rule::ColConstraint, |p| {
            if p.eat_keyword(Keyword::Constraint) {
                p.parse_col_id("constraint name")?;
            }
            match p.peek_keyword(0) {
                Some(Keyword::Not) => {
                    p.advance();
                    p.expect_keyword(Keyword::Null, "NOT NULL")
                }
                Some(Keyword::Null) => {
                    p.advance();
                    Ok(())
                }
                Some(Keyword::Check) => p.parse_check_constraint(),
                Some(Keyword::Default) => {
                    p.advance();
                    p.parse_b_expr()
                }
                Some(Keyword::Unique) => {
                    p.advance();
                    p.parse_opt_index_parameters()
                }
                Some(Keyword::Primary) => {
                    p.advance();
                    p.expect_keyword(Keyword::Key, "PRIMARY KEY")?;
                    p.parse_opt_index_parameters()
                }
                Some(Keyword::References) => p.parse_references_clause(),
                Some(Keyword::Generated) => p.parse_generated_column(),
                Some(Keyword::Collate) => {
                    p.advance();
                    p.parse_qualified_name("COLLATE clause")
                }
                _ => {
                    p.expect_labels(&[
                        "NOT",
                        "NULL",
                        "CHECK",
                        "DEFAULT",
                        "UNIQUE",
                        "PRIMARY",
                        "REFERENCES",
                        "GENERATED",
                        "COLLATE",
                    ]);
                    Err(p.error_at_current(CONSTRUCT))
                }
            }
        })
    }

    /// `CHECK (expr) [NO INHERIT]`.
    fn parse_check_constraint(&mut self) -> PResult {
        self.advance();
        self.expect(TokenKind::LeftParen, "CHECK constraint")?;
        self.parse_a_expr()?;
        self.expect(TokenKind::RightParen, "CHECK constraint")?;
        if self.peek_is(0, Keyword::No) && self.peek_is(1, Keyword::Inherit) {
            self.advance_n(2);
        }
        Ok(())
    }

    /// `GENERATED ALWAYS AS (expr) STORED` or
    /// `GENERATED ALWAYS|BY DEFAULT AS IDENTITY [(options)]`.
    fn parse_generated_column(&mut self) -> PResult {
        self.expect_keyword(Keyword::Generated, "generated column")?;
        let always = self.eat_keyword(Keyword::Always);
        if !always {
            self.expect_keyword(Keyword::By, "generated column")?;
            self.expect_keyword(Keyword::Default, "generated column")?;
        }
        self.expect_keyword(Keyword::As, "generated column")?;
        if always && self.eat(TokenKind::LeftParen) {
            self.parse_a_expr()?;
            self.expect(TokenKind::RightParen, "generated column")?;
            return self.expect_keyword(Keyword::Stored, "generated column");
        }
        self.expect_keyword(Keyword::Identity, "identity column")?;
        if self.peek_kind(0) == TokenKind::LeftParen {
            self.parse_seq_option_list()?;
        }
        Ok(())
    }

    /// `( option ... )` of an identity column.
    fn parse_seq_option_list(&mut self) -> PResult {
        self.node(Rule::SeqOptionList, |p| {
            p.advance();
            loop {
                p.parse_seq_option()?;
                if p.eat(TokenKind::RightParen) {
                    return Ok(());
                }
            }
        })
    }

    fn parse_seq_option(&mut self) -> PResult {
        const CONSTRUCT: &str = "sequence option";
        self.node(Rule::SeqOption, |p| match p.peek_keyword(0) {
            Some(Keyword::Increment) => {
                p.advance();
                p.eat_keyword(Keyword::By);
                p.parse_numeric_only(CONSTRUCT)
            }
            Some(Keyword::Start) => {
                p.advance();
                p.eat_keyword(Keyword::With);
                p.parse_numeric_only(CONSTRUCT)
            }
            Some(Keyword::MinValue | Keyword::MaxValue | Keyword::Cache) => {
                p.advance();
                p.parse_numeric_only(CONSTRUCT)
            }
            Some(Keyword::Cycle) => {
                p.advance();
                Ok(())
            }
            Some(Keyword::No) => {
                p.advance();
                if matches!(
                    p.peek_keyword(0),
                    Some(Keyword::MinValue | Keyword::MaxValue | Keyword::Cycle)
                ) {
                    p.advance();
                    return Ok(());
                }
                p.expect_labels(&["MINVALUE", "MAXVALUE", "CYCLE"]);
                Err(p.error_at_current(CONSTRUCT))
            }
            Some(Keyword::As) => {
                p.advance();
                p.parse_simple_type_name()
            }
            _ => {
                p.expect_labels(&[
                    "INCREMENT", "START", "MINVALUE", "MAXVALUE", "CACHE", "CYCLE", "NO", "AS",
                ]);
                Err(p.error_at_current(CONSTRUCT))
            }
        })
    }

    /// `[INCLUDE (cols)] [WITH (options)] [USING INDEX TABLESPACE name]`
    /// after `UNIQUE` or `PRIMARY KEY`.
    fn parse_opt_index_parameters(&mut self) -> PResult {
        if self.peek_is(0, Keyword::Include) {
            self.parse_include_clause()?;
        }
        self.parse_opt_with_reloptions()?;
        if self.peek_is(0, Keyword::Using) && self.peek_is(1, Keyword::Index) {
            self.advance_n(2);
            self.expect_keyword(Keyword::Tablespace, "USING INDEX TABLESPACE")?;
            self.parse_col_id("tablespace name")?;
        }
        Ok(())
    }

    fn parse_include_clause(&mut self) -> PResult {
        self.node(Rule::IncludeClause, |p| {
            p.advance();
            p.parse_paren_name_list("INCLUDE")
        })
    }

    /// `[CONSTRAINT name] CHECK (...) | UNIQUE (cols) | PRIMARY KEY (cols) |
    /// FOREIGN KEY (cols) REFERENCES ...`, then constraint attributes.
    fn parse_table_constraint(&mut self) -> PResult {
        const CONSTRUCT: &str = "table constraint";
        self.node(Rule::TableConstraint, |p| {
            if p.eat_keyword(Keyword::Constraint) {
                p.parse_col_id("constraint name")?;
            }
            match p.peek_keyword(0) {
                Some(Keyword::Check) => p.parse_check_constraint()?,
                Some(Keyword::Unique) => {
                    p.advance();
                    p.parse_paren_name_list(CONSTRUCT)?;
                    p.parse_opt_index_parameters()?;
                }
                Some(Keyword::Primary) => {
                    p.advance();
                    p.expect_keyword(Keyword::Key, "PRIMARY KEY")?;
                    p.parse_paren_name_list(CONSTRUCT)?;
                    p.parse_opt_index_parameters()?;
                }
                Some(Keyword::Foreign) => {
                    p.advance();
                    p.expect_keyword(Keyword::Key, "FOREIGN KEY")?;
                    p.parse_paren_name_list(CONSTRUCT)?;
                    p.parse_references_clause()?;
                }
                _ => {
                    p.expect_labels(&["CHECK", "UNIQUE", "PRIMARY", "FOREIGN"]);
                    return Err(p.error_at_current(CONSTRUCT));
                }
            }
            while p.peek_is_constraint_attr() {
                p.parse_constraint_attr()?;
            }
            Ok(())
        })
    }

    fn peek_is_constraint_attr(&mut self) -> bool {
        match self.peek_keyword(0) {
            Some(Keyword::Deferrable | Keyword::Initially) => true,
            Some(Keyword::Not) => self.peek_is(1, Keyword::Deferrable),
            _ => false,
        }
    }

    /// `[NOT] DEFERRABLE` or `INITIALLY DEFERRED|IMMEDIATE`.
    fn parse_constraint_attr(&mut self) -> PResult {
        self.node(Rule::ConstraintAttr, |p| {
            if p.eat_keyword(Keyword::Initially) {
                if p.eat_keyword(Keyword::Deferred) {
                    return Ok(());
                }
                return p.expect_keyword(Keyword::Immediate, "INITIALLY");
            }
            p.eat_keyword(Keyword::Not);
            p.expect_keyword(Keyword::Deferrable, "constraint attribute")
        })
    }

    /// `REFERENCES table [(cols)] [MATCH FULL|PARTIAL|SIMPLE]
    /// [ON DELETE|UPDATE action ...]`.
    fn parse_references_clause(&mut self) -> PResult {
        self.node(Rule::ReferencesClause, |p| {
            p.expect_keyword(Keyword::References, "foreign key")?;
            p.parse_qualified_name("referenced table")?;
            if p.peek_kind(0) == TokenKind::LeftParen {
                p.parse_paren_name_list("referenced columns")?;
            }
            if p.eat_keyword(Keyword::Match) {
                if !matches!(
                    p.peek_keyword(0),
                    Some(Keyword::Full | Keyword::Partial | Keyword::Simple)
                ) {
                    p.expect_labels(&["FULL", "PARTIAL", "SIMPLE"]);
                    return Err(p.error_at_current("MATCH type"));
                }
                p.advance();
            }
            while p.peek_is(0, Keyword::On)
                && matches!(p.peek_keyword(1), Some(Keyword::Delete | Keyword::Update))
            {
                p.parse_key_action()?;
            }
            Ok(())
        })
    }

    /// `ON DELETE|UPDATE NO ACTION|RESTRICT|CASCADE|SET NULL|SET DEFAULT`.
    fn parse_key_action(&mut self) -> PResult {
        const CONSTRUCT: &str = "referential action";
        self.node(Rule::KeyAction, |p| {
            p.advance_n(2);
            match p.peek_keyword(0) {
                Some(Keyword::No) => {
                    p.advance();
                    p.expect_keyword(Keyword::Action, CONSTRUCT)
                }
                Some(Keyword::Restrict | Keyword::Cascade) => {
                    p.advance();
                    Ok(())
                }
                Some(Keyword::Set) => {
                    p.advance();
                    if !p.eat_keyword(Keyword::Null) {
                        p.expect_keyword(Keyword::Default, CONSTRUCT)?;
                    }
                    if p.peek_kind(0) == TokenKind::LeftParen {
                        p.parse_paren_name_list(CONSTRUCT)?;
                    }
                    Ok(())
                }
                _ => {
                    p.expect_labels(&["NO", "RESTRICT", "CASCADE", "SET"]);
                    Err(p.error_at_current(CONSTRUCT))
                }
            }
        })
    }

    /// `LIKE source [INCLUDING|EXCLUDING option ...]`.
    fn parse_table_like_clause(&mut self) -> PResult {
        self.node(Rule::TableLikeClause, |p| {
            p.advance();
            p.parse_qualified_name("LIKE source table")?;
            while p.eat_keyword(Keyword::Including) || p.eat_keyword(Keyword::Excluding) {
                if !matches!(
                    p.peek_keyword(0),
                    Some(
                        Keyword::Comments
                            | Keyword::Constraints
                            | Keyword::Defaults
                            | Keyword::Identity
                            | Keyword::Generated
                            | Keyword::Indexes
                            | Keyword::Statistics
                            | Keyword::Storage
                            | Keyword::All
                    )
                ) {
                    p.expect_labels(&["ALL", "CONSTRAINTS", "DEFAULTS", "INDEXES"]);
                    return Err(p.error_at_current("LIKE option"));
                }
                p.advance();
            }
            Ok(())
        })
    }

    /// `PARTITION BY RANGE|LIST|HASH (key, ...)`.
    fn parse_partition_spec(&mut self) -> PResult {
        self.node(Rule::PartitionSpec, |p| {
            p.advance();
            p.expect_keyword(Keyword::By, "PARTITION BY")?;
            if !matches!(
                p.peek_keyword(0),
                Some(Keyword::Range | Keyword::List | Keyword::Hash)
            ) {
                p.expect_labels(&["RANGE", "LIST", "HASH"]);
                return Err(p.error_at_current("partition strategy"));
            }
            p.advance();
            p.expect(TokenKind::LeftParen, "partition key")?;
            loop {
                p.parse_index_elem()?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RightParen, "partition key")
        })
    }

    /// `ON COMMIT DROP|DELETE ROWS|PRESERVE ROWS`.
    fn parse_on_commit_clause(&mut self) -> PResult {
        self.node(Rule::OnCommitClause, |p| {
            p.advance_n(2);
            match p.peek_keyword(0) {
                Some(Keyword::Drop) => {
                    p.advance();
                    Ok(())
                }
                Some(Keyword::Delete | Keyword::Preserve) => {
                    p.advance();
                    p.expect_keyword(Keyword::Rows, "ON COMMIT")
                }
                _ => {
                    p.expect_labels(&["DROP", "DELETE", "PRESERVE"]);
                    Err(p.error_at_current("ON COMMIT"))
                }
            }
        })
    }

    /// `WITH (name [= value], ...)` when present.
    fn parse_opt_with_reloptions(&mut self) -> PResult {
        if self.peek_is(0, Keyword::With) && self.peek_kind(1) == TokenKind::LeftParen {
            self.advance();
            return self.parse_reloptions();
        }
        Ok(())
    }

    /// `( name [= value], ... )`.
    fn parse_reloptions(&mut self) -> PResult {
        const CONSTRUCT: &str = "storage parameters";
        self.node(Rule::RelOptions, |p| {
            p.expect(TokenKind::LeftParen, CONSTRUCT)?;
            loop {
                p.node(Rule::RelOption, |p| {
                    p.parse_col_label(CONSTRUCT)?;
                    if p.eat(TokenKind::Dot) {
                        p.parse_col_label(CONSTRUCT)?;
                    }
                    if p.eat(TokenKind::Eq) {
                        p.parse_option_value(CONSTRUCT)?;
                    }
                    Ok(())
                })?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RightParen, CONSTRUCT)
        })
    }

    /// A signed number, boolean, word or string.
    fn parse_option_value(&mut self, construct: &str) -> PResult {
        match self.peek_kind(0) {
            TokenKind::Integer | TokenKind::Decimal | TokenKind::Plus | TokenKind::Minus => {
                self.parse_numeric_only(construct)
            }
            _ => self.parse_boolean_or_string(construct),
        }
    }

    /// `CREATE [UNIQUE] INDEX [CONCURRENTLY] [[IF NOT EXISTS] name] ON
    /// relation [USING method] (elem, ...) [INCLUDE (cols)] [WITH (...)]
    /// [TABLESPACE name] [WHERE predicate]`.
    fn parse_create_index_stmt(&mut self) -> PResult {
        self.node(Rule::CreateIndexStmt, |p| {
            p.advance();
            p.eat_keyword(Keyword::Unique);
            p.expect_keyword(Keyword::Index, "CREATE INDEX")?;
            p.eat_keyword(Keyword::Concurrently);
            if !p.check_keyword(Keyword::On) {
                p.parse_opt_if_not_exists()?;
                p.parse_col_id("index name")?;
            }
            p.expect_keyword(Keyword::On, "CREATE INDEX")?;
            p.parse_relation_expr()?;
            if p.eat_keyword(Keyword::Using) {
                p.parse_col_id("access method")?;
            }
            p.node(Rule::IndexParams, |p| {
                p.expect(TokenKind::LeftParen, "index parameters")?;
                loop {
                    p.parse_index_elem()?;
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
                p.expect(TokenKind::RightParen, "index parameters")
            })?;
            if p.peek_is(0, Keyword::Include) {
                p.parse_include_clause()?;
            }
            p.parse_opt_with_reloptions()?;
            p.parse_opt_tablespace()?;
            if p.peek_is(0, Keyword::Where) {
                p.parse_where_clause(false)?;
            }
            Ok(())
        })
    }

    /// `CREATE [OR REPLACE] [TEMP] [RECURSIVE] VIEW name [(cols)]
    /// [WITH (...)] AS query [WITH [CASCADED|LOCAL] CHECK OPTION]`.
    fn parse_create_view_stmt(&mut self) -> PResult {
        self.node(Rule::CreateViewStmt, |p| {
            p.advance();
            if p.eat_keyword(Keyword::Or) {
                p.expect_keyword(Keyword::Replace, "CREATE OR REPLACE")?;
            }
            p.parse_opt_temp()?;
            p.eat_keyword(Keyword::Recursive);
            p.expect_keyword(Keyword::View, "CREATE VIEW")?;
            p.parse_qualified_name("view name")?;
            if p.peek_kind(0) == TokenKind::LeftParen {
                p.parse_paren_name_list("view column list")?;
            }
            p.parse_opt_with_reloptions()?;
            p.expect_keyword(Keyword::As, "CREATE VIEW")?;
            p.parse_select_stmt()?;
            if p.peek_is(0, Keyword::With) {
                p.node(Rule::ViewCheckOption, |p| {
                    p.advance();
                    if !p.eat_keyword(Keyword::Cascaded) {
                        p.eat_keyword(Keyword::Local);
                    }
                    p.expect_keyword(Keyword::Check, "WITH CHECK OPTION")?;
                    p.expect_keyword(Keyword::Option, "WITH CHECK OPTION")
                })?;
            }
            Ok(())
        })
    }

    /// `CREATE DATABASE name [WITH] [option [=] value ...]`.
    fn parse_create_database_stmt(&mut self) -> PResult {
        const CONSTRUCT: &str = "database option";
        self.node(Rule::CreateDatabaseStmt, |p| {
            p.advance();
            p.expect_keyword(Keyword::Database, "CREATE DATABASE")?;
            p.parse_col_id("database name")?;
            p.eat_keyword(Keyword::With);
            while p.peek_is_col_id(0) {
                p.node(Rule::CreatedbOption, |p| {
                    if p.eat_keyword(Keyword::Connection) {
                        p.expect_keyword(Keyword::Limit, "CONNECTION LIMIT")?;
                    } else {
                        p.parse_col_id(CONSTRUCT)?;
                    }
                    p.eat(TokenKind::Eq);
                    if p.eat_keyword(Keyword::Default) {
                        return Ok(());
                    }
                    p.parse_option_value(CONSTRUCT)
                })?;
            }
            Ok(())
        })
    }

    // --- ALTER ---

    /// Dispatches on the object type following `ALTER`.
    pub(super) fn parse_alter_stmt(&mut self) -> PResult {
        match self.peek_keyword(1) {
            Some(Keyword::Table) => self.parse_alter_table_stmt(),
            Some(Keyword::Index) => self.parse_alter_index_stmt(),
            _ => {
                self.advance();
                self.expect_labels(&["TABLE", "INDEX"]);
                Err(self.error_at_current("ALTER statement"))
            }
        }
    }

    /// `ALTER TABLE [IF EXISTS] relation action, ...`, or a lone
    /// `RENAME ...` or `SET SCHEMA name`.
    fn parse_alter_table_stmt(&mut self) -> PResult {
        self.node(Rule::AlterTableStmt, |p| {
            p.advance_n(2);
            p.parse_opt_if_exists();
            p.parse_relation_expr()?;
            if p.peek_is(0, Keyword::Rename) {
                return p.parse_rename_cmd();
            }
            if p.peek_is(0, Keyword::Set) && p.peek_is(1, Keyword::Schema) {
                return p.node(Rule::AlterTableCmd, |p| {
                    p.advance_n(2);
                    p.parse_col_id("schema name")
                });
            }
            loop {
                p.parse_alter_table_cmd()?;
                if !p.eat(TokenKind::Comma) {
                    return Ok(());
                }
            }
        })
    }

    /// `RENAME [COLUMN] a TO b`, `RENAME CONSTRAINT a TO b` or
    /// `RENAME TO name`.
    fn parse_rename_cmd(&mut self) -> PResult {
        self.node(Rule::AlterTableCmd, |p| {
            p.advance();
            if !p.eat_keyword(Keyword::To) {
                if !p.eat_keyword(Keyword::Constraint) {
                    p.eat_keyword(Keyword::Column);
                }
                p.parse_col_id("column name")?;
                p.expect_keyword(Keyword::To, "RENAME")?;
            }
            p.parse_col_id("new name")
        })
    }

    fn parse_alter_table_cmd(&mut self) -> PResult {
        const CONSTRUCT: &str = "ALTER TABLE action";
        self.node(Rule::AlterTableCmd, |p| match p.peek_keyword(0) {
            Some(Keyword::Add) => {
                p.advance();
                if p
                    .peek_keyword(0)
                    .is_some_and(|keyword| TABLE_CONSTRAINT_STARTS.contains(&keyword))
                {
                    return p.parse_table_constraint();
                }
                p.eat_keyword(Keyword::Column);
                p.parse_opt_if_not_exists()?;
                p.parse_column_def()
            }
            Some(Keyword::Drop) => {
                p.advance();
                if !p.eat_keyword(Keyword::Constraint) {
                    p.eat_keyword(Keyword::Column);
                }
                p.parse_opt_if_exists();
                p.parse_col_id("column or constraint name")?;
                p.parse_opt_drop_behavior();
                Ok(())
            }
            Some(Keyword::Alter) => {
                p.advance();
                p.eat_keyword(Keyword::Column);
                p.parse_col_id("column name")?;
                p.parse_alter_column_action()
            }
            Some(Keyword::Owner) => {
                p.advance();
                p.expect_keyword(Keyword::To, "OWNER TO")?;
                p.parse_role_spec()
            }
            Some(Keyword::Set) => {
                p.advance();
                match p.peek_keyword(0) {
                    Some(Keyword::Tablespace) => {
                        p.advance();
                        p.parse_col_id("tablespace name")
                    }
                    Some(Keyword::Logged | Keyword::Unlogged) => {
                        p.advance();
                        Ok(())
                    }
                    _ => {
                        p.expect_labels(&["TABLESPACE", "LOGGED", "UNLOGGED"]);
                        p.parse_reloptions()
                    }
                }
            }
            Some(Keyword::Reset) => {
                p.advance();
                p.parse_reloptions()
            }
            Some(Keyword::Validate) => {
                p.advance();
                p.expect_keyword(Keyword::Constraint, "VALIDATE CONSTRAINT")?;
                p.parse_col_id("constraint name")
            }
            Some(Keyword::Enable | Keyword::Disable) => {
                p.advance();
                p.expect_keyword(Keyword::Trigger, CONSTRUCT)?;
                if matches!(p.peek_keyword(0), Some(Keyword::All | Keyword::User)) {
                    p.advance();
                    return Ok(());
                }
                p.parse_col_id("trigger name")
            }
            _ => {
                p.expect_labels(&[
                    "ADD", "DROP", "ALTER", "OWNER", "SET", "RESET", "VALIDATE", "ENABLE",
                    "DISABLE", "RENAME",
                ]);
                Err(p.error_at_current(CONSTRUCT))
            }
        })
    }

    /// The action of `ALTER [COLUMN] name ...`.
    fn parse_alter_column_action(&mut self) -> PResult {
        const CONSTRUCT: &str = "ALTER COLUMN action";
        match self.peek_keyword(0) {
            Some(Keyword::Type) => self.parse_alter_column_type(),
            Some(Keyword::Set) if self.peek_is(1, Keyword::Data) => {
                self.advance_n(2);
                self.parse_alter_column_type()
            }
            Some(Keyword::Set) => {
                self.advance();
                match self.peek_keyword(0) {
                    Some(Keyword::Default) => {
                        self.advance();
                        self.parse_a_expr()
                    }
                    Some(Keyword::Not) => {
                        self.advance();
                        self.expect_keyword(Keyword::Null, "SET NOT NULL")
                    }
                    Some(Keyword::Statistics) => {
                        self.advance();
                        self.parse_signed_iconst("SET STATISTICS")
                    }
                    _ => {
                        self.expect_labels(&["DATA", "DEFAULT", "NOT", "STATISTICS"]);
                        Err(self.error_at_current(CONSTRUCT))
                    }
                }
            }
            Some(Keyword::Drop) => {
                self.advance();
                match self.peek_keyword(0) {
                    Some(Keyword::Default) => {
                        self.advance();
                        Ok(())
                    }
                    Some(Keyword::Not) => {
                        self.advance();
                        self.expect_keyword(Keyword::Null, "DROP NOT NULL")
                    }
                    Some(Keyword::Identity) => {
                        self.advance();
                        self.parse_opt_if_exists();
                        Ok(())
                    }
                    _ => {
                        self.expect_labels(&["DEFAULT", "NOT", "IDENTITY"]);
                        Err(self.error_at_current(CONSTRUCT))
                    }
                }
            }
            Some(Keyword::Add) => {
                self.advance();
                self.parse_generated_column()
            }
            _ => {
                self.expect_labels(&["TYPE", "SET", "DROP", "ADD"]);
                Err(self.error_at_current(CONSTRUCT))
            }
        }
    }

    /// `TYPE type [COLLATE name] [USING expr]`.
    fn parse_alter_column_type(&mut self) -> PResult {
        self.expect_keyword(Keyword::Type, "ALTER COLUMN TYPE")?;
        self.parse_type_name()?;
        if self.eat_keyword(Keyword::Collate) {
            self.parse_qualified_name("COLLATE clause")?;
        }
        if self.eat_keyword(Keyword::Using) {
            self.parse_a_expr()?;
        }
        Ok(())
    }

    /// A role name, `CURRENT_USER`, `CURRENT_ROLE` or `SESSION_USER`.
    fn parse_role_spec(&mut self) -> PResult {
        if matches!(
            self.peek_keyword(0),
            Some(Keyword::CurrentUser | Keyword::CurrentRole | Keyword::SessionUser)
        ) {
            self.advance();
            return Ok(());
        }
        self.parse_non_reserved_word("role name")
    }

    /// `ALTER INDEX [IF EXISTS] name` followed by one of `RENAME TO new`,
    /// `SET TABLESPACE t`, `SET (...)`, `RESET (...)`,
    /// `[NO] DEPENDS ON EXTENSION e`, `ATTACH PARTITION index` or
    /// `ALTER [COLUMN] n SET STATISTICS k`.
    fn parse_alter_index_stmt(&mut self) -> PResult {
        const CONSTRUCT: &str = "ALTER INDEX action";
        self.node(Rule::AlterIndexStmt, |p| {
            p.advance_n(2);
            p.parse_opt_if_exists();
            p.parse_qualified_name("index name")?;
            p.node(Rule::AlterTableCmd, |p| match p.peek_keyword(0) {
                Some(Keyword::Rename) => {
                    p.advance();
                    p.expect_keyword(Keyword::To, "RENAME TO")?;
                    p.parse_col_id("new name")
                }
                Some(Keyword::Set) => {
                    p.advance();
                    if p.eat_keyword(Keyword::Tablespace) {
                        return p.parse_col_id("tablespace name");
                    }
                    p.parse_reloptions()
                }
                Some(Keyword::Reset) => {
                    p.advance();
                    p.parse_reloptions()
                }
                Some(Keyword::No | Keyword::Depends) => {
                    p.eat_keyword(Keyword::No);
                    p.expect_keyword(Keyword::Depends, CONSTRUCT)?;
                    p.expect_keyword(Keyword::On, "DEPENDS ON EXTENSION")?;
                    p.expect_keyword(Keyword::Extension, "DEPENDS ON EXTENSION")?;
                    p.parse_col_id("extension name")
                }
                Some(Keyword::Attach) => {
                    p.advance();
                    p.expect_keyword(Keyword::Partition, "ATTACH PARTITION")?;
                    p.parse_qualified_name("index name")
                }
                Some(Keyword::Alter) => {
                    p.advance();
                    p.eat_keyword(Keyword::Column);
                    p.expect(TokenKind::Integer, "column number")?;
                    p.expect_keyword(Keyword::Set, CONSTRUCT)?;
                    p.expect_keyword(Keyword::Statistics, CONSTRUCT)?;
                    p.parse_signed_iconst("SET STATISTICS")
                }
                _ => {
                    p.expect_labels(&["RENAME", "SET", "RESET", "DEPENDS", "NO", "ATTACH", "ALTER"]);
                    Err(p.error_at_current(CONSTRUCT))
                }
            })
        })
    }

    // --- DROP, TRUNCATE ---

    /// `DROP TABLE|VIEW [IF EXISTS] names [CASCADE|RESTRICT]`,
    /// `DROP INDEX [CONCURRENTLY] ...` or `DROP DATABASE ...`.
    pub(super) fn parse_drop_stmt(&mut self) -> PResult {
        let rule = match self.peek_keyword(1) {
            Some(Keyword::Table) => Rule::DropTableStmt,
            Some(Keyword::Index) => Rule::DropIndexStmt,
            Some(Keyword::View) => Rule::DropViewStmt,
            Some(Keyword::Database) => return self.parse_drop_database_stmt(),
            _ => {
                self.advance();
                self.expect_labels(&["TABLE", "INDEX", "VIEW", "DATABASE"]);
                return Err(self.error_at_current("DROP statement"));
            }
        };
        self.node(rule, |p| {
            p.advance_n(2);
            if rule == Rule::DropIndexStmt {
                p.eat_keyword(Keyword::Concurrently);
            }
            p.parse_opt_if_exists();
            p.parse_qualified_name_list("object name")?;
            p.parse_opt_drop_behavior();
            Ok(())
        })
    }

    /// `DROP DATABASE [IF EXISTS] name [[WITH] (FORCE)]`.
    fn parse_drop_database_stmt(&mut self) -> PResult {
        const CONSTRUCT: &str = "DROP DATABASE options";
        self.node(Rule::DropDatabaseStmt, |p| {
            p.advance_n(2);
            p.parse_opt_if_exists();
            p.parse_col_id("database name")?;
            if p.eat_keyword(Keyword::With) || p.peek_kind(0) == TokenKind::LeftParen {
                p.expect(TokenKind::LeftParen, CONSTRUCT)?;
                loop {
                    p.expect_keyword(Keyword::Force, CONSTRUCT)?;
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
                p.expect(TokenKind::RightParen, CONSTRUCT)?;
            }
            Ok(())
        })
    }

    /// `TRUNCATE [TABLE] relation, ... [RESTART|CONTINUE IDENTITY]
    /// [CASCADE|RESTRICT]`.
    pub(super) fn parse_truncate_stmt(&mut self) -> PResult {
        self.node(Rule::TruncateStmt, |p| {
            p.advance();
            p.eat_keyword(Keyword::Table);
            loop {
                p.parse_relation_expr()?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            if p.eat_keyword(Keyword::Restart) || p.eat_keyword(Keyword::Continue) {
                p.expect_keyword(Keyword::Identity, "TRUNCATE")?;
            }
            p.parse_opt_drop_behavior();
            Ok(())
        })
    }
}
