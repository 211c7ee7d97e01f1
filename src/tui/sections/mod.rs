//! Content sections composing the single scrolling page.
//!
//! Each section renders its static content as styled lines and owns one
//! reveal timeline. Gated sections (about, projects, contact, footer) register
//! a scroll trigger on mount and play or reverse their timeline as the
//! viewport crosses their threshold; the hero instead plays once, right after
//! the preloader completes. Line counts are independent of animation state so
//! section tops stay stable while reveals run.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;

use ratatui::text::Line;

use crate::constants::{FOOTER_THRESHOLD, REVEAL_THRESHOLD};
use crate::content::Content;
use crate::motion::{Crossing, TriggerRegistry};
use crate::tui::Theme;

pub use about::AboutSection;
pub use contact::{ContactSection, FormField, OutboundMessage, SimulatedSubmitter, Submitter};
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;

/// Stable anchor identifiers targeted by navigation and footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Hero section (`home`)
    Home,
    /// About section (`about`)
    About,
    /// Projects section (`projects`)
    Projects,
    /// Contact section (`contact`)
    Contact,
}

impl Anchor {
    /// All anchors in page order.
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// Display label used by navigation links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Anchor id as it appears in links (`#home` style targets).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Parses an anchor id. Unknown ids yield `None` (silent skip).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.id() == id)
    }
}

/// Greedy word wrap used by sections for body text.
///
/// Always returns at least one (possibly empty) line so callers can rely on
/// a stable line count for a given width.
#[must_use]
pub(crate) fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}

// Gate handles within the page's trigger registry, in page order.
const GATE_ABOUT: usize = 0;
const GATE_PROJECTS: usize = 1;
const GATE_CONTACT: usize = 2;
const GATE_FOOTER: usize = 3;

/// The single scrolling page: all five sections plus their trigger gates.
#[derive(Debug)]
pub struct Page {
    /// Hero section (not gated; plays after the preloader)
    pub hero: HeroSection,
    /// About section
    pub about: AboutSection,
    /// Projects section
    pub projects: ProjectsSection,
    /// Contact section, hosting the form
    pub contact: ContactSection,
    /// Footer
    pub footer: FooterSection,
    reduced_motion: bool,
}

impl Page {
    /// Builds the page and arms one gate per scroll-revealed section.
    #[must_use]
    pub fn new(content: &Content, triggers: &mut TriggerRegistry, reduced_motion: bool) -> Self {
        triggers.arm(GATE_ABOUT, REVEAL_THRESHOLD);
        triggers.arm(GATE_PROJECTS, REVEAL_THRESHOLD);
        triggers.arm(GATE_CONTACT, REVEAL_THRESHOLD);
        triggers.arm(GATE_FOOTER, FOOTER_THRESHOLD);
        Self {
            hero: HeroSection::new(),
            about: AboutSection::new(content.skills.len()),
            projects: ProjectsSection::new(content.projects.len()),
            contact: ContactSection::new(content.socials.len()),
            footer: FooterSection::new(),
            reduced_motion,
        }
    }

    /// Releases every gate and cancels in-flight reveals (page teardown).
    pub fn unmount(&mut self, triggers: &mut TriggerRegistry) {
        triggers.release(GATE_ABOUT);
        triggers.release(GATE_PROJECTS);
        triggers.release(GATE_CONTACT);
        triggers.release(GATE_FOOTER);
        self.hero.timeline.cancel();
        self.about.timeline.cancel();
        self.projects.timeline.cancel();
        self.contact.timeline.cancel();
        self.footer.timeline.cancel();
    }

    /// Starts the hero entrance (called once, when loading completes).
    pub fn start_hero(&mut self) {
        self.hero.timeline.play();
        if self.reduced_motion {
            self.hero.timeline.finish();
        }
    }

    /// Line offsets of each section's top for the given content and width.
    ///
    /// Order matches page order: hero, about, projects, contact, footer.
    #[must_use]
    pub fn section_tops(&self, width: u16, content: &Content, theme: &Theme) -> [usize; 5] {
        let hero = self.hero.lines(width, content, theme).len();
        let about = self.about.lines(width, content, theme).len();
        let projects = self.projects.lines(width, content, theme).len();
        let contact = self.contact.lines(width, content, theme).len();
        [
            0,
            hero,
            hero + about,
            hero + about + projects,
            hero + about + projects + contact,
        ]
    }

    /// Top line of the section matching `anchor`, or `None` if the anchor has
    /// no matching section (skipped silently by callers).
    #[must_use]
    pub fn anchor_top(
        &self,
        anchor: Anchor,
        width: u16,
        content: &Content,
        theme: &Theme,
    ) -> Option<usize> {
        let tops = self.section_tops(width, content, theme);
        match anchor {
            Anchor::Home => Some(tops[0]),
            Anchor::About => Some(tops[1]),
            Anchor::Projects => Some(tops[2]),
            Anchor::Contact => Some(tops[3]),
        }
    }

    /// Total page height in lines.
    #[must_use]
    pub fn total_height(&self, width: u16, content: &Content, theme: &Theme) -> usize {
        let tops = self.section_tops(width, content, theme);
        tops[4] + self.footer.lines(width, content, theme).len()
    }

    /// Advances every reveal and updates the scroll trigger gates.
    pub fn tick(
        &mut self,
        dt: f32,
        triggers: &mut TriggerRegistry,
        scroll: f32,
        viewport: u16,
        width: u16,
        content: &Content,
        theme: &Theme,
    ) {
        let tops = self.section_tops(width, content, theme);

        let gates = [
            (GATE_ABOUT, tops[1]),
            (GATE_PROJECTS, tops[2]),
            (GATE_CONTACT, tops[3]),
            (GATE_FOOTER, tops[4]),
        ];
        for (handle, top) in gates {
            let crossing = triggers.update(handle, top as f32, scroll, viewport);
            if let Some(crossing) = crossing {
                let timeline = match handle {
                    GATE_ABOUT => &mut self.about.timeline,
                    GATE_PROJECTS => &mut self.projects.timeline,
                    GATE_CONTACT => &mut self.contact.timeline,
                    _ => &mut self.footer.timeline,
                };
                match crossing {
                    Crossing::Entered => {
                        timeline.play();
                        if self.reduced_motion {
                            timeline.finish();
                        }
                    }
                    Crossing::Left => {
                        if self.reduced_motion {
                            timeline.rewind();
                        } else {
                            timeline.reverse();
                        }
                    }
                }
            }
        }

        self.hero.timeline.advance(dt);
        self.about.timeline.advance(dt);
        self.projects.timeline.advance(dt);
        self.contact.timeline.advance(dt);
        self.footer.timeline.advance(dt);
    }

    /// Renders the full page as one list of lines (the caller windows it by
    /// the scroll offset).
    #[must_use]
    pub fn lines(&self, width: u16, content: &Content, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = self.hero.lines(width, content, theme);
        lines.extend(self.about.lines(width, content, theme));
        lines.extend(self.projects.lines(width, content, theme));
        lines.extend(self.contact.lines(width, content, theme));
        lines.extend(self.footer.lines(width, content, theme));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_roundtrip() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_id(anchor.id()), Some(anchor));
        }
        assert_eq!(Anchor::from_id("blog"), None);
    }

    #[test]
    fn test_mount_arms_gates_and_unmount_releases() {
        let mut triggers = TriggerRegistry::new();
        let content = Content::default();
        let mut page = Page::new(&content, &mut triggers, false);
        assert_eq!(triggers.len(), 4);
        page.unmount(&mut triggers);
        assert!(triggers.is_empty());
    }

    #[test]
    fn test_section_tops_are_increasing() {
        let mut triggers = TriggerRegistry::new();
        let content = Content::default();
        let page = Page::new(&content, &mut triggers, false);
        let theme = Theme::dark();
        let tops = page.section_tops(80, &content, &theme);
        for pair in tops.windows(2) {
            assert!(pair[0] < pair[1], "tops not increasing: {tops:?}");
        }
        assert!(page.total_height(80, &content, &theme) > tops[4]);
    }

    #[test]
    fn test_line_count_stable_during_animation() {
        let mut triggers = TriggerRegistry::new();
        let content = Content::default();
        let mut page = Page::new(&content, &mut triggers, false);
        let theme = Theme::dark();

        let before = page.lines(80, &content, &theme).len();
        page.start_hero();
        // Scroll to the bottom so every gate plays, then advance mid-reveal.
        let total = page.total_height(80, &content, &theme) as f32;
        page.tick(0.3, &mut triggers, total, 40, 80, &content, &theme);
        let during = page.lines(80, &content, &theme).len();
        assert_eq!(before, during);
    }

    #[test]
    fn test_scrolling_down_plays_scrolling_up_reverses() {
        let mut triggers = TriggerRegistry::new();
        let content = Content::default();
        let mut page = Page::new(&content, &mut triggers, false);
        let theme = Theme::dark();
        let tops = page.section_tops(80, &content, &theme);

        // On a 20-line viewport the about section is below the fold at the
        // top of the page; scroll it into view.
        let scroll = tops[1] as f32;
        page.tick(0.01, &mut triggers, scroll, 20, 80, &content, &theme);
        assert!(page.about.timeline.is_playing());

        // Scroll back to the top: the reveal reverses.
        page.tick(0.01, &mut triggers, 0.0, 20, 80, &content, &theme);
        for _ in 0..200 {
            page.tick(0.033, &mut triggers, 0.0, 20, 80, &content, &theme);
        }
        assert!(page.about.timeline.at_start());
    }
}
