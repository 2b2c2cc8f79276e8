//! Global CSS styles for the Lumen intro page.
//!
//! Colors come only from the three theme variables. The runtime writes them
//! into a second `:root` block; the values below are the first palette entry
//! so the page is themed even when initialization fails.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* THEME (written by the runtime) */
  --primary-color: #667eea;
  --secondary-color: #764ba2;
  --accent-color: #f093fb;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.8);

  /* Typography */
  --font-display: 'Poppins', 'Segoe UI', system-ui, sans-serif;
  --font-body: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-theme: 1s ease;
  --transition-entrance: 1s cubic-bezier(0.4, 0, 0.2, 1);
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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
  background: linear-gradient(135deg, var(--primary-color) 0%, var(--secondary-color) 100%);
  transition: background var(--transition-theme);
}

/* Visibility pause: one property on the body, inherited everywhere */
body *,
body *::before,
body *::after {
  animation-play-state: inherit !important;
}

/* === Page Layout === */
.page {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.container {
  position: relative;
  z-index: 1;
  max-width: 720px;
  text-align: center;
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-entrance), transform var(--transition-entrance);
}

.container.entered {
  opacity: 1;
  transform: translateY(0);
}

/* === Typewriter Title === */
.title {
  font-family: var(--font-display);
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.2;
  min-height: 1.2em;
  text-shadow: 0 4px 30px rgba(0, 0, 0, 0.2);
}

.title::after {
  content: '|';
  margin-left: 0.1em;
  color: var(--accent-color);
  animation: blink 1s step-end infinite;
}

.title.typewriter-complete::after {
  content: '';
  animation: none;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Subtitle === */
.subtitle {
  margin-top: 1.25rem;
  font-size: 1.25rem;
  color: var(--text-secondary);
  opacity: 0;
}

/* === Entrance === */
.fadeInUp {
  animation: fadeInUp 0.8s ease-out forwards;
}

@keyframes fadeInUp {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* === Action Button === */
.btn-action {
  position: relative;
  overflow: hidden;
  margin-top: 2.5rem;
  padding: 1rem 2.75rem;
  border: none;
  border-radius: 999px;
  background: var(--accent-color);
  color: var(--text-primary);
  font-family: var(--font-display);
  font-size: 1.125rem;
  font-weight: 600;
  cursor: pointer;
  opacity: 0;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  transition: scale var(--transition-fast), background var(--transition-theme), box-shadow var(--transition-fast);
}

.btn-action:hover {
  box-shadow: 0 14px 40px rgba(0, 0, 0, 0.25);
}

/* `scale` is independent of the entrance's filled `transform` */
.btn-action.pulse {
  scale: 0.95;
}

.btn-action-label {
  position: relative;
  z-index: 1;
}

/* === Ripple === */
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.5);
  transform: scale(0);
  pointer-events: none;
  animation: ripple-expand 0.6s ease-out forwards;
}

@keyframes ripple-expand {
  to {
    transform: scale(2);
    opacity: 0;
  }
}

/* === Particles === */
.particles {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}

.particle {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.6);
  box-shadow: 0 0 6px var(--accent-color);
  animation-name: float;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
  transition: left 1s ease, top 1s ease;
}

@keyframes float {
  0%, 100% {
    transform: translateY(0) translateX(0);
    opacity: 0.3;
  }
  50% {
    transform: translateY(-40px) translateX(15px);
    opacity: 0.9;
  }
}

/* === Notifications === */
.notification-stack {
  position: fixed;
  top: 1.5rem;
  right: 1.5rem;
  z-index: 10;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.notification {
  padding: 0.875rem 1.5rem;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.15);
  backdrop-filter: blur(10px);
  border: 1px solid rgba(255, 255, 255, 0.25);
  color: var(--text-primary);
  font-size: 0.95rem;
  opacity: 0;
  transform: translateX(120%);
  transition: opacity 0.3s ease, transform 0.3s ease;
}

.notification.show {
  opacity: 1;
  transform: translateX(0);
}

/* === Keyboard Navigation === */
button:focus {
  outline: none;
}

.keyboard-navigation button:focus,
.keyboard-navigation a:focus {
  outline: 3px solid var(--accent-color);
  outline-offset: 4px;
}

/* === Responsive === */
@media (max-width: 640px) {
  .title {
    font-size: 2.25rem;
  }

  .subtitle {
    font-size: 1rem;
  }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
