use crate::piece::PieceKind;

/// Which promotion moves a pawn reaching the far rank produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromotionPolicy {
    /// One promotion move per kind in [`PieceKind::PROMOTION_CHOICES`]; the
    /// caller picks the kind by picking the move.
    #[default]
    AllChoices,
    /// Only a promotion into this kind is generated.
    Always(PieceKind),
}

/// Rule options shared by a board and every board derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RulesConfig {
    pub promotion: PromotionPolicy,
}
impl RulesConfig {
    /// # Panics
    /// Panics when `kind` is not a legal promotion target.
    pub fn auto_promote(kind: PieceKind) -> Self {
        assert!(kind.is_promotion_choice(), "cannot promote into a {kind}");
        RulesConfig {
            promotion: PromotionPolicy::Always(kind),
        }
    }
    pub fn promotion_choices(&self) -> &[PieceKind] {
        match &self.promotion {
            PromotionPolicy::AllChoices => &PieceKind::PROMOTION_CHOICES,
            PromotionPolicy::Always(kind) => std::slice::from_ref(kind),
        }
    }
    /// Kind used when a move is looked up by coordinates alone.
    pub fn default_promotion(&self) -> PieceKind {
        match self.promotion {
            PromotionPolicy::AllChoices => PieceKind::Queen,
            PromotionPolicy::Always(kind) => kind,
        }
    }
}
