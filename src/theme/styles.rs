//! Global CSS styles for the business card.
//!
//! Ocean-and-sand palette for Los Cabos. Overlay visibility follows the
//! `data-open` attribute published by the overlay coordinator.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* OCEAN (Primary actions) */
  --ocean: #0077b6;
  --ocean-deep: #023e8a;
  --ocean-glow: rgba(0, 119, 182, 0.3);

  /* SAND (Backgrounds) */
  --sand: #fdf6ec;
  --sand-darker: #f1e4cf;
  --card-bg: #ffffff;

  /* SUNSET (Accents) */
  --sunset: #f77f00;
  --whatsapp: #25d366;

  /* TEXT */
  --text-primary: #1d2d3d;
  --text-secondary: rgba(29, 45, 61, 0.75);
  --text-muted: rgba(29, 45, 61, 0.55);

  /* SEMANTIC */
  --success: #2a9d8f;
  --danger: #d62828;
  --info: #0077b6;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Playfair Display', Georgia, serif;

  /* Motion */
  --exit-duration: 300ms;
  --radius: 14px;
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
  background: var(--sand);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: var(--ocean);
}

/* === Card Layout === */
.app-root {
  min-height: 100vh;
}

.card {
  max-width: 520px;
  margin: 0 auto;
  padding: 2rem 1.25rem 6rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.card-header {
  text-align: center;
}

.business-name {
  font-family: var(--font-display);
  font-size: 2rem;
  color: var(--ocean-deep);
}

.contact-name {
  font-weight: 600;
}

.tagline {
  color: var(--text-secondary);
}

.card-footer {
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Promo Video === */
.promo-video {
  width: 100%;
  border-radius: var(--radius);
  background: #000;
}

.video-fallback {
  display: flex;
  align-items: center;
  justify-content: center;
  aspect-ratio: 16 / 9;
  border-radius: var(--radius);
  background: var(--sand-darker);
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.85rem 1.25rem;
  border-radius: var(--radius);
  font: inherit;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.btn-primary {
  background: var(--ocean);
  color: #fff;
  border: none;
}

.btn-secondary {
  background: var(--card-bg);
  color: var(--ocean-deep);
  border: 1px solid var(--sand-darker);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: none;
}

.btn-primary:hover,
.btn-secondary:hover {
  transform: translateY(-1px);
  box-shadow: 0 4px 14px var(--ocean-glow);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}

.action-buttons {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
}

.action-call {
  grid-column: 1 / -1;
}

.action-whatsapp .action-icon {
  color: var(--whatsapp);
}

/* === Services === */
.section-title {
  font-family: var(--font-display);
  font-size: 1.25rem;
  margin-bottom: 0.75rem;
}

.service-grid {
  list-style: none;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem;
}

.service-link {
  display: block;
  padding: 0.6rem 0.75rem;
  border-radius: 10px;
  background: var(--card-bg);
  text-decoration: none;
  font-size: 0.9rem;
}

/* === Social Menu === */
.social-menu-inner {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.mobile-social-toggle {
  display: none;
}

.social-strip {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.social-link {
  display: inline-block;
  padding: 0.5rem 0.9rem;
  border-radius: 999px;
  background: var(--card-bg);
  text-decoration: none;
}

/* === Modal Overlay === */
.modal-overlay,
.chat-overlay {
  position: fixed;
  inset: 0;
  background: rgba(2, 62, 138, 0.45);
  z-index: 1000;
  opacity: 0;
  transition: opacity var(--exit-duration) ease;
}

.modal-overlay {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
}

.modal-overlay[data-open="true"],
.chat-overlay[data-open="true"] {
  opacity: 1;
}

.modal-overlay[hidden],
.chat-overlay[hidden] {
  display: none;
}

.modal-panel {
  position: relative;
  background: var(--card-bg);
  border-radius: var(--radius);
  max-width: 380px;
  width: 100%;
  padding: 2rem 1.5rem 1.5rem;
  text-align: center;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.25);
}

.modal-panel .close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
}

.modal-title {
  font-family: var(--font-display);
  margin-bottom: 0.5rem;
}

.call-number {
  font-size: 1.5rem;
  font-weight: 700;
  letter-spacing: 0.03em;
  margin-bottom: 1.25rem;
}

.modal-actions {
  display: flex;
  gap: 0.75rem;
  justify-content: center;
}

/* === Chat Widget === */
.chat-fab {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 50%;
  border: none;
  background: var(--sunset);
  color: #fff;
  font-size: 1.5rem;
  cursor: pointer;
  z-index: 1001;
  box-shadow: 0 6px 20px rgba(247, 127, 0, 0.4);
}

.chat-panel {
  position: absolute;
  top: 0;
  right: 0;
  bottom: 0;
  width: min(420px, 100%);
  display: flex;
  flex-direction: column;
  background: var(--card-bg);
  transform: translateX(100%);
  transition: transform var(--exit-duration) ease;
}

.chat-overlay[data-open="true"] .chat-panel {
  transform: translateX(0);
}

.chat-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--sand-darker);
  font-weight: 600;
}

.chat-body {
  position: relative;
  flex: 1;
}

.chat-frame {
  width: 100%;
  height: 100%;
  border: none;
}

/* === Loading Indicator === */
.loading-indicator {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  background: var(--card-bg);
  color: var(--text-muted);
}

.loading-indicator.hidden {
  display: none;
}

.spinner {
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--sand-darker);
  border-top-color: var(--ocean);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Toasts === */
.toast-container {
  position: fixed;
  top: 1rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 1100;
  width: min(92vw, 420px);
}

.toast {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  color: #fff;
  opacity: 0;
  transform: translateY(-0.5rem);
  transition: opacity var(--exit-duration) ease, transform var(--exit-duration) ease;
}

.toast.show {
  opacity: 1;
  transform: translateY(0);
}

.toast-success { background: var(--success); }
.toast-error { background: var(--danger); }
.toast-info { background: var(--info); }

.toast-close {
  background: transparent;
  border: none;
  color: inherit;
  font-size: 1.25rem;
  cursor: pointer;
}

/* === Accessibility === */
.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

.skip-link {
  position: absolute;
  left: -9999px;
}

.skip-link:focus {
  left: 1rem;
  top: 1rem;
  z-index: 1200;
  background: var(--card-bg);
  padding: 0.5rem 1rem;
}

*:focus-visible {
  outline: 3px solid var(--sunset);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 768px) {
  .mobile-social-toggle {
    display: inline-flex;
  }

  .social-strip {
    display: none;
  }

  .social-strip.open {
    display: flex;
  }

  .service-grid {
    grid-template-columns: 1fr;
  }
}
"#;
