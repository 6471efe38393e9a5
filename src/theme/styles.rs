//! Global CSS styles for ZenPulse.
//!
//! Night palette with a periwinkle accent; the paywall sits on a
//! periwinkle-pink-coral gradient.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #1a1a2e;
  --card: #2a2a3e;
  --card-locked: #3a3a4e;

  /* ACCENT */
  --periwinkle: #667eea;
  --periwinkle-soft: rgba(102, 126, 234, 0.1);

  /* PAYWALL GRADIENT */
  --pink: #f093fb;
  --coral: #f5576c;

  /* TEXT */
  --text-primary: #ffffff;
  --text-muted: #888888;
  --text-dim: #666666;

  /* SEMANTIC */
  --premium: #ffd700;
  --savings: #4caf50;

  /* Typography */
  --font-sans: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

/* === Glyphs === */
.glyph {
  display: inline-block;
  line-height: 1;
  color: var(--periwinkle);
}

.glyph.muted {
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary {
  background: var(--periwinkle);
  border-radius: 12px;
  padding: 0.75rem 1.5rem;
  font-weight: 600;
  transition: opacity var(--transition-fast);
}

.btn-primary:hover {
  opacity: 0.9;
}

.btn-plan {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  width: 100%;
  margin-top: 1rem;
  padding: 0.75rem;
  border-radius: 12px;
  background: #ffffff;
  color: var(--periwinkle);
  font-weight: 600;
}

.btn-plan.popular {
  background: var(--periwinkle);
  color: #ffffff;
}

.btn-plan.popular .glyph {
  color: #ffffff;
}

.btn-ghost {
  padding: 0.75rem 1.5rem;
  border: 1px solid rgba(255, 255, 255, 0.4);
  border-radius: 24px;
  color: #ffffff;
  transition: background var(--transition-fast);
}

.btn-ghost:hover {
  background: rgba(255, 255, 255, 0.1);
}

.btn-fab {
  position: fixed;
  right: 24px;
  bottom: 24px;
  width: 56px;
  height: 56px;
  border-radius: 50%;
  background: var(--periwinkle);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
  display: flex;
  align-items: center;
  justify-content: center;
}

.btn-fab .glyph {
  color: #ffffff;
}

.icon-btn {
  padding: 4px;
  font-size: 18px;
  line-height: 1;
}

.close-btn {
  color: var(--text-dim);
  font-size: 22px;
}

.back-btn {
  margin-right: 12px;
  color: #ffffff;
}

/* === Paywall === */
.paywall {
  min-height: 100vh;
  padding: 2rem 1.25rem 3rem;
  background: linear-gradient(160deg, var(--periwinkle), var(--pink), var(--coral));
}

.hero {
  text-align: center;
  padding: 2rem 0 2.5rem;
}

.hero-glow {
  display: inline-flex;
  padding: 1.25rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.15);
  box-shadow: 0 0 40px rgba(255, 255, 255, 0.4);
  margin-bottom: 1.25rem;
}

.hero-glow .glyph {
  color: #ffffff;
}

.hero-title {
  font-size: 2rem;
  font-weight: 800;
}

.hero-subtitle {
  opacity: 0.9;
  margin-top: 0.5rem;
}

.section-title {
  font-size: 1.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1rem;
}

.features {
  margin-bottom: 2rem;
}

.features-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
}

.feature-card {
  background: rgba(255, 255, 255, 0.95);
  border-radius: 16px;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
}

.feature-text {
  color: #333333;
  font-size: 0.875rem;
  font-weight: 600;
  text-align: center;
}

.plans {
  margin-bottom: 2rem;
}

.plan-card {
  position: relative;
  background: rgba(255, 255, 255, 0.95);
  color: #333333;
  border-radius: 20px;
  padding: 1.25rem;
  margin-bottom: 1rem;
  cursor: pointer;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
  transition: transform var(--transition-fast);
}

.plan-card:hover {
  transform: translateY(-2px);
}

.plan-card.popular {
  border: 2px solid var(--periwinkle);
  margin-top: 1.5rem;
}

.popular-badge {
  position: absolute;
  top: -14px;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 0.25rem;
  white-space: nowrap;
  background: var(--periwinkle);
  color: #ffffff;
  font-size: 0.75rem;
  font-weight: 700;
  padding: 0.25rem 0.75rem;
  border-radius: 12px;
}

.popular-badge .glyph {
  color: #ffffff;
}

.plan-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
}

.plan-name {
  font-size: 1.125rem;
  font-weight: 700;
}

.plan-card.popular .plan-name,
.plan-card.popular .price {
  color: var(--periwinkle);
}

.price {
  font-size: 1.5rem;
  font-weight: 800;
}

.period {
  color: var(--text-dim);
  margin-left: 2px;
}

.plan-savings {
  display: inline-block;
  margin-top: 0.5rem;
  background: var(--savings);
  color: #ffffff;
  font-size: 0.75rem;
  font-weight: 700;
  padding: 0.2rem 0.6rem;
  border-radius: 8px;
}

.free-continue {
  display: flex;
  justify-content: center;
  margin-bottom: 1.5rem;
}

.paywall-footer {
  text-align: center;
  font-size: 0.75rem;
  opacity: 0.8;
}

/* === Browse === */
.meditations {
  min-height: 100vh;
  padding-bottom: 96px;
}

.browse-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.5rem 1.25rem 1rem;
  border-bottom: 1px solid var(--card);
}

.header-left {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.header-left .glyph {
  color: #ffffff;
}

.header-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.header-mood {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  background: var(--periwinkle-soft);
  padding: 0.25rem 0.5rem;
  border-radius: 12px;
}

.header-mood-text {
  font-size: 0.75rem;
  color: var(--periwinkle);
  font-weight: 500;
}

.status-bar {
  padding: 0.75rem 1.25rem;
}

.status-text {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.status-text.premium {
  color: var(--premium);
  font-weight: 600;
}

.meditation-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  padding: 0 1rem;
}

.meditation-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  background: var(--card);
  border-radius: 16px;
  padding: 1rem;
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.3);
  transition: transform var(--transition-fast);
}

.meditation-card:hover {
  transform: translateY(-2px);
}

.meditation-card.locked {
  background: var(--card-locked);
  opacity: 0.8;
}

.card-icon {
  margin-bottom: 0.75rem;
}

.card-title {
  font-weight: 600;
  text-align: center;
  margin-bottom: 0.5rem;
}

.meditation-card.locked .card-title {
  color: var(--text-muted);
}

.card-duration {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.meditation-card.locked .card-duration {
  color: var(--text-dim);
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.6);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 1.25rem;
  animation: fade-in var(--transition-normal);
}

.mood-modal,
.alert-dialog {
  background: #ffffff;
  color: #333333;
  border-radius: 20px;
  padding: 1.25rem;
  width: 100%;
  max-width: 380px;
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
}

.modal-title-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.modal-title {
  font-size: 1.125rem;
  font-weight: 700;
}

.modal-description {
  color: var(--text-dim);
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

.mood-grid {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.mood-card {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  text-align: left;
  background: #f5f6ff;
  border-radius: 12px;
  padding: 0.75rem;
}

.mood-name {
  display: block;
  font-weight: 600;
  color: #333333;
}

.mood-description {
  display: block;
  font-size: 0.75rem;
  color: var(--text-dim);
}

.alert-message {
  white-space: pre-line;
  margin: 0.75rem 0 1.25rem;
  font-size: 0.95rem;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
}

.dialog-btn {
  padding: 0.5rem 1rem;
  border-radius: 8px;
  color: var(--periwinkle);
  font-weight: 600;
}

.dialog-btn.cancel {
  color: var(--text-dim);
}

.dialog-btn.accent {
  background: var(--periwinkle);
  color: #ffffff;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors;

    #[test]
    fn palette_constants_match_css() {
        for color in [
            colors::NIGHT,
            colors::CARD,
            colors::CARD_LOCKED,
            colors::PERIWINKLE,
            colors::PERIWINKLE_SOFT,
            colors::PINK,
            colors::CORAL,
            colors::TEXT_PRIMARY,
            colors::TEXT_MUTED,
            colors::TEXT_DIM,
            colors::PREMIUM,
            colors::SAVINGS,
        ] {
            assert!(GLOBAL_STYLES.contains(color), "missing {}", color);
        }
    }

    #[test]
    fn every_component_class_is_styled() {
        for class in [
            ".paywall",
            ".plan-card",
            ".meditation-card.locked",
            ".mood-modal",
            ".alert-dialog",
            ".modal-overlay",
            ".btn-fab",
            ".header-mood",
        ] {
            assert!(GLOBAL_STYLES.contains(class), "missing {}", class);
        }
    }
}
