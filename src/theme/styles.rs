//! Global CSS styles for the portfolio.
//!
//! Both palettes are CSS custom properties switched by the `data-theme`
//! attribute on the page root. Animations are plain CSS transitions
//! triggered by class changes (`.visible`, `.open`, `.scrolled`, `.active`).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.page,
.page[data-theme="dark"] {
  /* Surfaces */
  --bg: #0b0f14;
  --bg-elevated: #121821;
  --bg-card: #161e29;
  --border: #223041;

  /* Accents */
  --accent: #00ffd1;
  --accent-alt: #00d4ff;
  --accent-glow: rgba(0, 255, 209, 0.25);

  /* Text */
  --text-primary: #f2f5f8;
  --text-secondary: rgba(242, 245, 248, 0.72);
  --text-muted: rgba(242, 245, 248, 0.5);

  --overlay: rgba(5, 8, 12, 0.85);
}

.page[data-theme="light"] {
  --bg: #f6f8fb;
  --bg-elevated: #ffffff;
  --bg-card: #ffffff;
  --border: #dde3ea;

  --accent: #00a88a;
  --accent-alt: #0088cc;
  --accent-glow: rgba(0, 168, 138, 0.18);

  --text-primary: #111827;
  --text-secondary: rgba(17, 24, 39, 0.72);
  --text-muted: rgba(17, 24, 39, 0.5);

  --overlay: rgba(17, 24, 39, 0.6);
}

:root {
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;

  --radius: 14px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
}

.page {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

section {
  padding: 6rem 1.5rem;
  max-width: 1200px;
  margin: 0 auto;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.section-subtitle {
  color: var(--text-secondary);
  margin-bottom: 3rem;
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.8rem 1.6rem;
  border-radius: 999px;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: linear-gradient(135deg, var(--accent), var(--accent-alt));
  color: #0b0f14;
  border: none;
}

.btn-outline {
  background: transparent;
  color: var(--accent);
  border: 2px solid var(--accent);
}

.btn-link {
  background: transparent;
  color: var(--accent);
  border: none;
  padding-left: 0;
}

.btn-primary:hover,
.btn-outline:hover {
  transform: translateY(-2px);
  box-shadow: 0 8px 24px var(--accent-glow);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  color: var(--text-primary);
  font-size: 1.25rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.icon-btn:hover {
  border-color: var(--accent);
  color: var(--accent);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 2rem;
  transition: padding var(--transition-normal), background var(--transition-normal);
}

.navbar.scrolled {
  padding: 0.75rem 2rem;
  background: var(--bg-elevated);
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.15);
}

.nav-logo {
  font-weight: 800;
  font-size: 1.4rem;
  color: var(--accent);
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  position: relative;
  transition: color var(--transition-fast);
}

.nav-link.active,
.nav-link:hover {
  color: var(--accent);
}

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  right: 0;
  bottom: -6px;
  height: 2px;
  background: var(--accent);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.nav-toggle span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.nav-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.nav-toggle.active span:nth-child(2) { opacity: 0; }
.nav-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

/* === Hero === */
.hero {
  min-height: 100vh;
  display: grid;
  grid-template-columns: 1.2fr 1fr;
  align-items: center;
  gap: 3rem;
}

.hero-greeting {
  color: var(--accent);
  font-family: var(--font-mono);
}

.hero-name {
  font-size: 3.5rem;
  font-weight: 800;
  line-height: 1.1;
}

.hero-title {
  font-size: 1.6rem;
  color: var(--text-secondary);
  min-height: 2.4rem;
}

.typed-cursor {
  display: inline-block;
  width: 2px;
  height: 1.4rem;
  margin-left: 2px;
  background: var(--accent);
  animation: blink 1s step-end infinite;
}

.hero-description {
  color: var(--text-secondary);
  margin: 1.5rem 0 2rem;
  max-width: 540px;
}

.hero-cta {
  display: flex;
  gap: 1rem;
}

.hero-visual {
  display: flex;
  justify-content: center;
  will-change: transform;
}

.hero-avatar {
  width: 320px;
  height: 320px;
  border-radius: 50%;
  background: radial-gradient(circle at 30% 30%, var(--accent), var(--accent-alt) 60%, transparent 61%);
  box-shadow: 0 0 80px var(--accent-glow);
}

/* === About / Stats === */
.about-grid {
  display: grid;
  grid-template-columns: 1.4fr 1fr;
  gap: 3rem;
}

.about-text p {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.stats {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.25rem;
}

.stat-card {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  text-align: center;
}

.stat-number {
  font-size: 2.5rem;
  font-weight: 800;
  color: var(--accent);
}

.stat-label {
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.25rem;
}

.skill-card {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.25rem 1.5rem;
}

.skill-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.skill-percent {
  color: var(--accent);
  font-family: var(--font-mono);
}

.skill-bar {
  height: 8px;
  border-radius: 999px;
  background: var(--border);
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  width: 0;
  border-radius: inherit;
  background: linear-gradient(90deg, var(--accent), var(--accent-alt));
  transition: width 1.5s ease;
}

/* === Portfolio === */
.portfolio-filters {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
}

.filter-btn {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.filter-btn.active,
.filter-btn:hover {
  border-color: var(--accent);
  color: var(--accent);
  background: var(--accent-glow);
}

.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
  animation: fadeIn 0.5s ease forwards;
}

.project-card:hover {
  transform: translateY(-6px);
  box-shadow: 0 16px 40px var(--accent-glow);
}

.project-card.hidden {
  display: none;
}

.project-image {
  aspect-ratio: 16 / 10;
  object-fit: cover;
  width: 100%;
  background: var(--bg-elevated);
}

.project-body {
  padding: 1.25rem 1.5rem 1.5rem;
}

.project-category {
  color: var(--accent);
  font-size: 0.8rem;
  font-family: var(--font-mono);
  text-transform: uppercase;
}

.project-title {
  font-size: 1.3rem;
  margin: 0.25rem 0 0.75rem;
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tech-tag {
  padding: 0.25rem 0.7rem;
  border-radius: 999px;
  font-size: 0.8rem;
  background: var(--accent-glow);
  color: var(--accent);
}

.tech-tags.compact .tech-tag {
  font-size: 0.72rem;
  padding: 0.15rem 0.55rem;
}

/* === Project Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: var(--overlay);
  backdrop-filter: blur(6px);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.modal-overlay.open {
  opacity: 1;
  visibility: visible;
}

.modal-content {
  position: relative;
  display: grid;
  grid-template-columns: 1.1fr 1fr;
  gap: 2rem;
  width: 100%;
  max-width: 1040px;
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--bg-elevated);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  transform: translateY(24px) scale(0.98);
  transition: transform var(--transition-normal);
}

.modal-overlay.open .modal-content {
  transform: none;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.modal-gallery,
.modal-info {
  min-width: 0;
}

.theme-toggle {
  font-size: 1.1rem;
}

.gallery-main {
  position: relative;
  border-radius: var(--radius);
  overflow: hidden;
  background: var(--bg);
}

.gallery-main img {
  width: 100%;
  max-height: 60vh;
  object-fit: contain;
}

.gallery-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.gallery-nav.prev { left: 0.75rem; }
.gallery-nav.next { right: 0.75rem; }

.gallery-thumbnails {
  display: flex;
  gap: 0.5rem;
  margin-top: 0.75rem;
  overflow-x: auto;
}

.thumbnail {
  width: 72px;
  height: 72px;
  object-fit: cover;
  border-radius: 8px;
  border: 2px solid transparent;
  opacity: 0.6;
  cursor: pointer;
  transition: opacity var(--transition-fast), border-color var(--transition-fast);
}

.thumbnail.active,
.thumbnail:hover {
  opacity: 1;
  border-color: var(--accent);
}

.modal-category {
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: 0.85rem;
  text-transform: uppercase;
}

.modal-title {
  font-size: 2rem;
  margin: 0.25rem 0 1rem;
}

.modal-description {
  color: var(--text-secondary);
  margin-bottom: 1.25rem;
}

.modal-subheading {
  font-size: 1rem;
  margin: 1.5rem 0 0.75rem;
}

.modal-features {
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

.modal-features li {
  margin-bottom: 0.4rem;
}

.modal-link {
  margin-top: 1.75rem;
}

/* === Contact / Footer === */
.contact-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.contact-link {
  padding: 1rem 1.5rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-card);
  transition: border-color var(--transition-fast);
}

.contact-link:hover {
  border-color: var(--accent);
}

.footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Reveal Animations === */
.fade-in {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.fade-in.visible {
  opacity: 1;
  transform: none;
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-content > * {
  opacity: 0;
  animation: fadeInUp 0.6s ease forwards;
}

.hero-content > *:nth-child(2) { animation-delay: 0.1s; }
.hero-content > *:nth-child(3) { animation-delay: 0.2s; }
.hero-content > *:nth-child(4) { animation-delay: 0.3s; }
.hero-content > *:nth-child(5) { animation-delay: 0.4s; }

/* === Mobile === */
@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: 64px;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 1.25rem;
    padding: 2rem;
    background: var(--bg-elevated);
    transform: translateY(-150%);
    transition: transform var(--transition-normal);
  }

  .nav-menu.active {
    transform: none;
  }

  .hero,
  .about-grid,
  .modal-content {
    grid-template-columns: 1fr;
  }

  .hero-name {
    font-size: 2.5rem;
  }

  .hero-avatar {
    width: 220px;
    height: 220px;
  }
}
"#;
