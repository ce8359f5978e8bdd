/// How a visitor can reach the workshop outside of the inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Phone,
    Email,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactChannel {
    /// Whether the link leaves the site and should open in a new tab.
    pub const fn is_external(&self) -> bool {
        matches!(self.kind, ChannelKind::Chat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ChannelKind::Phone,
        label: "(555) 014-2290",
        href: "tel:+15550142290",
    },
    ContactChannel {
        kind: ChannelKind::Email,
        label: "studio@atelier-furniture.com",
        href: "mailto:studio@atelier-furniture.com",
    },
    ContactChannel {
        kind: ChannelKind::Chat,
        label: "Chat with a designer",
        href: "https://wa.me/15550142290",
    },
];

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "Consultation",
        description: "Tell us about your space, how you live in it and what the piece needs to do.",
    },
    ProcessStep {
        title: "Design",
        description: "We send sketches, wood and fabric samples, and a fixed quote within a week.",
    },
    ProcessStep {
        title: "Crafting",
        description: "Your piece is built by hand in our workshop, with progress photos along the way.",
    },
    ProcessStep {
        title: "Delivery",
        description: "White-glove delivery and installation, plus a lifetime structural warranty.",
    },
];

pub const OFFERINGS: [Offering; 4] = [
    Offering {
        title: "Dining tables",
        description: "Solid hardwood tops sized to the room, with extension leaves on request.",
    },
    Offering {
        title: "Built-in shelving",
        description: "Floor-to-ceiling libraries and media walls scribed to uneven walls.",
    },
    Offering {
        title: "Upholstered seating",
        description: "Sofas and benches on hand-tied springs in your choice of fabric or leather.",
    },
    Offering {
        title: "Bedroom suites",
        description: "Beds, nightstands and wardrobes designed as a matching set.",
    },
];
