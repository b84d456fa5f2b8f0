use bitflags::bitflags;
use filter_syntax::ast::ComparisonOperator;

bitflags! {
    /// Comparison operators a field accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct OperatorSet: u16 {
        const EQ        = 1 << 0;
        const NE        = 1 << 1;
        const LT        = 1 << 2;
        const LE        = 1 << 3;
        const GT        = 1 << 4;
        const GE        = 1 << 5;
        const IN        = 1 << 6;
        const NOT_IN    = 1 << 7;
        const LIKE      = 1 << 8;
        const NOT_LIKE  = 1 << 9;
        const ILIKE     = 1 << 10;
        const NOT_ILIKE = 1 << 11;
    }
}

impl OperatorSet {
    pub const fn equality() -> Self {
        Self::EQ.union(Self::NE)
    }

    pub const fn ordering() -> Self {
        Self::LT.union(Self::LE).union(Self::GT).union(Self::GE)
    }

    pub const fn membership() -> Self {
        Self::IN.union(Self::NOT_IN)
    }

    pub const fn pattern() -> Self {
        Self::LIKE
            .union(Self::NOT_LIKE)
            .union(Self::ILIKE)
            .union(Self::NOT_ILIKE)
    }

    pub fn allows(&self, op: ComparisonOperator) -> bool {
        self.contains(Self::from(op))
    }
}

impl From<ComparisonOperator> for OperatorSet {
    fn from(op: ComparisonOperator) -> Self {
        match op {
            ComparisonOperator::Equal => Self::EQ,
            ComparisonOperator::NotEqual => Self::NE,
            ComparisonOperator::LessThan => Self::LT,
            ComparisonOperator::LessOrEqual => Self::LE,
            ComparisonOperator::GreaterThan => Self::GT,
            ComparisonOperator::GreaterOrEqual => Self::GE,
            ComparisonOperator::In => Self::IN,
            ComparisonOperator::NotIn => Self::NOT_IN,
            ComparisonOperator::Like => Self::LIKE,
            ComparisonOperator::NotLike => Self::NOT_LIKE,
            ComparisonOperator::ILike => Self::ILIKE,
            ComparisonOperator::NotILike => Self::NOT_ILIKE,
        }
    }
}

impl FromIterator<ComparisonOperator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = ComparisonOperator>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, op| set | Self::from(op))
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::all()
    }
}
