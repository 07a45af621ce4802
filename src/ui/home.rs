//! Home page content and section layout for the terminal preview.

use std::time::Duration;

use crate::ui::reveal::{BlockId, RevealDirection};
use crate::ui::viewport::Extent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Categories,
    WhyUs,
    Testimonials,
    CallToAction,
}

/// Reveal placement of one home section.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub section: Section,
    pub height: u16,
    pub direction: RevealDirection,
    pub delay: Duration,
}

impl SectionSpec {
    pub fn block(&self) -> BlockId {
        BlockId(self.section as u64)
    }
}

/// Rows between sections.
pub const SECTION_GAP: u16 = 1;

pub const SECTIONS: [SectionSpec; 5] = [
    SectionSpec {
        section: Section::Hero,
        height: 9,
        direction: RevealDirection::Up,
        delay: Duration::ZERO,
    },
    SectionSpec {
        section: Section::Categories,
        height: 12,
        direction: RevealDirection::Up,
        delay: Duration::from_millis(100),
    },
    SectionSpec {
        section: Section::WhyUs,
        height: 10,
        direction: RevealDirection::Left,
        delay: Duration::ZERO,
    },
    SectionSpec {
        section: Section::Testimonials,
        height: 9,
        direction: RevealDirection::Right,
        delay: Duration::from_millis(100),
    },
    SectionSpec {
        section: Section::CallToAction,
        height: 5,
        direction: RevealDirection::Scale,
        delay: Duration::from_millis(150),
    },
];

/// Document extents of every section, top to bottom.
pub fn section_extents() -> Vec<(SectionSpec, Extent)> {
    let mut top = 0;
    SECTIONS
        .iter()
        .map(|spec| {
            let extent = Extent {
                top,
                height: spec.height,
            };
            top += spec.height + SECTION_GAP;
            (*spec, extent)
        })
        .collect()
}

/// Total document height in rows.
pub fn document_height() -> u16 {
    section_extents()
        .last()
        .map(|(_, e)| e.top + e.height)
        .unwrap_or(0)
}

pub const HERO_BADGE: &str = "★ Authorized Sika Distributor & Partner";
pub const HERO_TITLE: &str = "Premium Sika Solutions Delivered to Your Project";
pub const HERO_BODY: &str = "The complete range of Sika adhesives, flooring, roofing and \
waterproofing products, backed by local expertise and global quality.";

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Authorized Partner",
        desc: "Official distributor with full product warranty.",
    },
    Feature {
        title: "Fast Delivery",
        desc: "Next-day delivery across the region.",
    },
    Feature {
        title: "Technical Expertise",
        desc: "Certified advisors help you pick the right product.",
    },
    Feature {
        title: "Competitive Pricing",
        desc: "Direct distributor pricing.",
    },
    Feature {
        title: "Project Support",
        desc: "From specification to application.",
    },
    Feature {
        title: "Sika Quality",
        desc: "Backed by 110+ years of innovation.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Michael T.",
            role: "Project Manager, BuildCo",
            quote: "Their expertise and fast delivery made our waterproofing project a success.",
            rating: 5,
        },
        Testimonial {
            name: "Sarah K.",
            role: "Structural Engineer",
            quote: "We've relied on their adhesive solutions for 3 years. Consistently high quality.",
            rating: 5,
        },
        Testimonial {
            name: "David R.",
            role: "General Contractor",
            quote: "The flooring systems exceeded client expectations at a competitive price.",
            rating: 5,
        },
    ]
}

pub const CTA_TITLE: &str = "Ready to start your project?";
pub const CTA_BODY: &str = "Get a quote from our technical team today.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_do_not_overlap() {
        let extents = section_extents();
        for pair in extents.windows(2) {
            let (_, a) = pair[0];
            let (_, b) = pair[1];
            assert_eq!(b.top, a.top + a.height + SECTION_GAP);
        }
        assert_eq!(document_height(), 9 + 12 + 10 + 9 + 5 + 4 * SECTION_GAP);
    }

    #[test]
    fn block_ids_are_distinct() {
        let mut ids: Vec<_> = SECTIONS.iter().map(SectionSpec::block).collect();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
