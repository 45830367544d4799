//! Operator precedence metadata.
//!
//! Levels are listed loosest first. Each level turns into a pair of Pratt
//! binding powers; the expression parser never hard-codes a number.

/// Groups of operators that share a precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `UNION`, `EXCEPT` (and `MINUS` where the dialect has it).
    UnionExcept,
    /// `INTERSECT`.
    Intersect,
    /// `OR`.
    Or,
    /// `AND`.
    And,
    /// Prefix `NOT`.
    Not,
    /// `IS ...`, `ISNULL`, `NOTNULL`.
    Is,
    /// `<`, `>`, `=`, `<=`, `>=`, `<>`.
    Comparison,
    /// `BETWEEN`, `IN`, `LIKE`, `ILIKE`, `SIMILAR TO`, `OVERLAPS` and their
    /// `NOT` forms.
    PatternRange,
    /// `ESCAPE` after a pattern match.
    Escape,
    /// Every other operator: `||`, JSON, regex, bitwise, `OPERATOR(...)`.
    UserOperator,
    /// `+`, `-`.
    Additive,
    /// `*`, `/`, `%`.
    Multiplicative,
    /// `^`.
    Exponent,
    /// `AT TIME ZONE`.
    AtTimeZone,
    /// `COLLATE`.
    Collate,
    /// Prefix `+` and `-`.
    UnarySign,
    /// `[...]` subscripts.
    Subscript,
    /// `::` casts.
    TypeCast,
}

/// How operators of one level group with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `NOT NOT a` is `NOT (NOT a)`.
    Right,
    /// `a < b < c` is a syntax error.
    NonAssoc,
}

/// One row of the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceLevel {
    /// Position in the table; higher binds tighter.
    pub level: u8,
    /// Grouping of operators within the level.
    pub associativity: Associativity,
    /// Operator classes on this level.
    pub operators: &'static [OperatorClass],
    /// True when the level's forms span several tokens (`IS NOT NULL`,
    /// `BETWEEN ... AND ...`, `AT TIME ZONE`).
    pub special_form: bool,
}

impl PrecedenceLevel {
    const fn new(
        level: u8,
        associativity: Associativity,
        operators: &'static [OperatorClass],
        special_form: bool,
    ) -> Self {
        Self {
            level,
            associativity,
            operators,
            special_form,
        }
    }

    /// Returns `(left_bp, right_bp)` for an infix use of this level.
    ///
    /// - Higher binding power = binds tighter
    /// - Left associative: `left_bp < right_bp`
    /// - Right associative: `left_bp == right_bp`
    #[must_use]
    pub const fn binding_power(&self) -> (u8, u8) {
        let base = self.level * 2;
        match self.associativity {
            Associativity::Left | Associativity::NonAssoc => (base, base + 1),
            Associativity::Right => (base, base),
        }
    }

    /// Returns the minimum binding power of the operand of a prefix
    /// operator on this level.
    #[must_use]
    pub const fn prefix_binding_power(&self) -> u8 {
        self.binding_power().1
    }
}

/// An ordered set of precedence levels.
#[derive(Debug, Clone, Copy)]
pub struct PrecedenceTable {
    levels: &'static [PrecedenceLevel],
}

impl PrecedenceTable {
    /// Creates a table from levels listed loosest first.
    #[must_use]
    pub const fn new(levels: &'static [PrecedenceLevel]) -> Self {
        Self { levels }
    }

    /// All levels, loosest first.
    #[must_use]
    pub const fn levels(&self) -> &'static [PrecedenceLevel] {
        self.levels
    }

    /// Finds the level of an operator class.
    #[must_use]
    pub fn level_of(&self, class: OperatorClass) -> Option<&'static PrecedenceLevel> {
        self.levels.iter().find(|l| l.operators.contains(&class))
    }

    /// Returns the infix binding powers of an operator class.
    #[must_use]
    pub fn binding_power(&self, class: OperatorClass) -> Option<(u8, u8)> {
        self.level_of(class).map(PrecedenceLevel::binding_power)
    }

    /// Returns the operand binding power of a prefix operator class.
    #[must_use]
    pub fn prefix_binding_power(&self, class: OperatorClass) -> Option<u8> {
        self.level_of(class).map(PrecedenceLevel::prefix_binding_power)
    }

    /// Returns true if the class is non-associative.
    #[must_use]
    pub fn is_non_assoc(&self, class: OperatorClass) -> bool {
        self.level_of(class)
            .is_some_and(|l| l.associativity == Associativity::NonAssoc)
    }
}

/// PostgreSQL operator precedence, loosest first.
pub static POSTGRES_PRECEDENCE: PrecedenceTable = PrecedenceTable::new(&[
    PrecedenceLevel::new(1, Associativity::Left, &[OperatorClass::UnionExcept], false),
    PrecedenceLevel::new(2, Associativity::Left, &[OperatorClass::Intersect], false),
    PrecedenceLevel::new(3, Associativity::Left, &[OperatorClass::Or], false),
    PrecedenceLevel::new(4, Associativity::Left, &[OperatorClass::And], false),
    PrecedenceLevel::new(5, Associativity::Right, &[OperatorClass::Not], false),
    PrecedenceLevel::new(6, Associativity::NonAssoc, &[OperatorClass::Is], true),
    PrecedenceLevel::new(7, Associativity::NonAssoc, &[OperatorClass::Comparison], false),
    PrecedenceLevel::new(8, Associativity::NonAssoc, &[OperatorClass::PatternRange], true),
    PrecedenceLevel::new(9, Associativity::NonAssoc, &[OperatorClass::Escape], true),
    PrecedenceLevel::new(10, Associativity::Left, &[OperatorClass::UserOperator], false),
    PrecedenceLevel::new(11, Associativity::Left, &[OperatorClass::Additive], false),
    PrecedenceLevel::new(12, Associativity::Left, &[OperatorClass::Multiplicative], false),
    PrecedenceLevel::new(13, Associativity::Left, &[OperatorClass::Exponent], false),
    PrecedenceLevel::new(14, Associativity::Left, &[OperatorClass::AtTimeZone], true),
    PrecedenceLevel::new(15, Associativity::Left, &[OperatorClass::Collate], true),
    PrecedenceLevel::new(16, Associativity::Right, &[OperatorClass::UnarySign], false),
    PrecedenceLevel::new(17, Associativity::Left, &[OperatorClass::Subscript], true),
    PrecedenceLevel::new(18, Associativity::Left, &[OperatorClass::TypeCast], true),
]);

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(class: OperatorClass) -> (u8, u8) {
        POSTGRES_PRECEDENCE
            .binding_power(class)
            .unwrap_or_else(|| panic!("{class:?} missing"))
    }

    #[test]
    fn test_levels_are_strictly_increasing() {
        for pair in POSTGRES_PRECEDENCE.levels().windows(2) {
            assert!(pair[0].level < pair[1].level);
        }
    }

    #[test]
    fn test_every_class_has_one_level() {
        let classes = [
            OperatorClass::UnionExcept,
            OperatorClass::Intersect,
            OperatorClass::Or,
            OperatorClass::And,
            OperatorClass::Not,
            OperatorClass::Is,
            OperatorClass::Comparison,
            OperatorClass::PatternRange,
            OperatorClass::Escape,
            OperatorClass::UserOperator,
            OperatorClass::Additive,
            OperatorClass::Multiplicative,
            OperatorClass::Exponent,
            OperatorClass::AtTimeZone,
            OperatorClass::Collate,
            OperatorClass::UnarySign,
            OperatorClass::Subscript,
            OperatorClass::TypeCast,
        ];
        for class in classes {
            let count = POSTGRES_PRECEDENCE
                .levels()
                .iter()
                .filter(|l| l.operators.contains(&class))
                .count();
            assert_eq!(count, 1, "{class:?}");
        }
    }

    #[test]
    fn test_precedence_order() {
        assert!(bp(OperatorClass::Multiplicative).0 > bp(OperatorClass::Additive).0);
        assert!(bp(OperatorClass::Additive).0 > bp(OperatorClass::UserOperator).0);
        assert!(bp(OperatorClass::Comparison).0 > bp(OperatorClass::Is).0);
        assert!(bp(OperatorClass::And).0 > bp(OperatorClass::Or).0);
        assert!(bp(OperatorClass::TypeCast).0 > bp(OperatorClass::UnarySign).0);
        assert!(bp(OperatorClass::Intersect).0 > bp(OperatorClass::UnionExcept).0);
    }

    #[test]
    fn test_associativity() {
        let (l, r) = bp(OperatorClass::Additive);
        assert!(l < r, "left associative");
        let not = POSTGRES_PRECEDENCE
            .level_of(OperatorClass::Not)
            .map(PrecedenceLevel::binding_power);
        assert_eq!(not.map(|(l, r)| l == r), Some(true), "right associative");
        assert!(POSTGRES_PRECEDENCE.is_non_assoc(OperatorClass::Comparison));
        assert!(!POSTGRES_PRECEDENCE.is_non_assoc(OperatorClass::Additive));
    }

    #[test]
    fn test_prefix_operand_binds_tighter_than_and() {
        let not_operand = POSTGRES_PRECEDENCE
            .prefix_binding_power(OperatorClass::Not)
            .unwrap_or_default();
        assert!(bp(OperatorClass::And).0 < not_operand);
        assert!(bp(OperatorClass::Comparison).0 >= not_operand);
    }
}
