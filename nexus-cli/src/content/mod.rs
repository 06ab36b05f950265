//! Static page content for the Nexus Digital landing page.
//!
//! Everything here is declarative data consumed by the view layer; the
//! interactive state lives in the landing app and its widget models.

use chrono::NaiveDate;

pub const COMPANY_NAME: &str = "Nexus Digital";
pub const HERO_TAGLINE: &str = "Welcome to your digital workspace";
pub const HERO_SUBTITLE: &str =
    "Streamline your workflow, connect with your team, and stay updated with everything happening at Nexus Digital";
pub const FOOTER_LINE: &str = "© 2025 Nexus Digital. Made with care by the intranet team.";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid static date")
}

#[derive(Debug, Clone)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn hero_stats() -> Vec<HeroStat> {
    vec![
        HeroStat {
            label: "Active Users",
            value: "2,847",
        },
        HeroStat {
            label: "Projects",
            value: "156",
        },
        HeroStat {
            label: "Uptime",
            value: "99.9%",
        },
    ]
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub location: &'static str,
    pub attendees: u32,
    pub category: &'static str,
    pub description: &'static str,
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Team Building Workshop",
            date: date(2025, 7, 15),
            time: "14:00 - 17:00",
            location: "Conference Room A",
            attendees: 24,
            category: "Team Building",
            description: "Join us for an interactive team building session focused on collaboration and communication.",
        },
        Event {
            id: 2,
            title: "Coffee & Code Session",
            date: date(2025, 7, 18),
            time: "10:00 - 11:30",
            location: "Lounge Area",
            attendees: 12,
            category: "Social",
            description: "Casual coding session with coffee, snacks, and great conversations about tech.",
        },
        Event {
            id: 3,
            title: "Q3 Presentation Day",
            date: date(2025, 7, 22),
            time: "09:00 - 16:00",
            location: "Main Auditorium",
            attendees: 156,
            category: "Business",
            description: "Quarterly presentations from all departments showcasing achievements and goals.",
        },
        Event {
            id: 4,
            title: "Summer Office Party",
            date: date(2025, 7, 25),
            time: "18:00 - 22:00",
            location: "Rooftop Terrace",
            attendees: 89,
            category: "Celebration",
            description: "Celebrate summer with food, drinks, music, and fun activities for the whole team.",
        },
    ]
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub avatar: &'static str,
    pub fun_fact: &'static str,
    pub achievement: &'static str,
    pub skills: &'static [&'static str],
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Sarah Chen",
            role: "Senior UX Designer",
            department: "Design",
            avatar: "SC",
            fun_fact: "Has visited 23 countries and speaks 4 languages fluently",
            achievement: "Led the redesign that increased user engagement by 40%",
            skills: &["UI/UX Design", "Prototyping", "User Research"],
        },
        TeamMember {
            name: "Marcus Rodriguez",
            role: "Full Stack Developer",
            department: "Engineering",
            avatar: "MR",
            fun_fact: "Builds mechanical keyboards in his spare time",
            achievement: "Optimized backend performance, reducing load times by 60%",
            skills: &["React", "Node.js", "PostgreSQL"],
        },
        TeamMember {
            name: "Emily Watson",
            role: "Data Analyst",
            department: "Analytics",
            avatar: "EW",
            fun_fact: "Former competitive chess player and coffee connoisseur",
            achievement: "Identified key insights that drove 25% revenue growth",
            skills: &["Python", "SQL", "Data Visualization"],
        },
        TeamMember {
            name: "David Kim",
            role: "Product Manager",
            department: "Product",
            avatar: "DK",
            fun_fact: "Marathon runner who's completed 12 races across 6 countries",
            achievement: "Successfully launched 3 major features ahead of schedule",
            skills: &["Strategy", "Agile", "User Stories"],
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone)]
pub struct NewsItem {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
    pub date: NaiveDate,
    pub author: &'static str,
    pub category: &'static str,
    pub is_new: bool,
    pub priority: Priority,
}

pub fn news_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: "Q3 Results: Record Breaking Performance!",
            summary: "We've achieved our highest quarterly revenue with exceptional team performance across all departments.",
            body: "This quarter has been absolutely phenomenal for Nexus Digital. We've not only met but exceeded all our targets, with a 35% increase in revenue compared to Q2. Our engineering team delivered 3 major product updates, the design team won 2 industry awards, and our sales team closed the biggest deal in company history. We're planning a company-wide celebration next Friday to recognize these achievements.",
            date: date(2025, 7, 10),
            author: "Sarah Johnson, CEO",
            category: "Company News",
            is_new: true,
            priority: Priority::High,
        },
        NewsItem {
            id: 2,
            title: "New Employee Wellness Program Launch",
            summary: "Introducing comprehensive wellness benefits including mental health support, fitness memberships, and flexible work arrangements.",
            body: "We're excited to announce the launch of our comprehensive Employee Wellness Program, effective immediately. This program includes free mental health counseling sessions, gym membership reimbursements up to $100/month, flexible work-from-home options, and quarterly wellness days. Additionally, we're introducing meditation rooms on each floor and healthy snack options in all break rooms.",
            date: date(2025, 7, 8),
            author: "Michael Chen, HR Director",
            category: "HR & Benefits",
            is_new: true,
            priority: Priority::Medium,
        },
        NewsItem {
            id: 3,
            title: "Innovation Lab Opens Next Month",
            summary: "Our new state-of-the-art innovation lab will provide cutting-edge tools and collaborative spaces for experimental projects.",
            body: "Get ready for the grand opening of our Innovation Lab on August 1st! This 2,000 square foot space features the latest in VR/AR technology, 3D printing capabilities, IoT development kits, and collaborative workstations. We'll be hosting weekly 'Innovation Hours' where teams can present their experimental projects. Booking system will go live next week.",
            date: date(2025, 7, 5),
            author: "Alex Rivera, CTO",
            category: "Innovation",
            is_new: false,
            priority: Priority::Medium,
        },
        NewsItem {
            id: 4,
            title: "Team Excellence Awards - Nominations Open",
            summary: "Nominate your colleagues for outstanding contributions in various categories. Recognition ceremony scheduled for month-end.",
            body: "It's time to recognize the amazing work of our team members! Nominations are now open for our quarterly Team Excellence Awards. Categories include: Innovation Champion, Collaboration Star, Customer Hero, Mentor of the Quarter, and Rising Star. Nominations close on July 20th, and the ceremony will be held on July 30th with catered lunch and prizes.",
            date: date(2025, 7, 3),
            author: "Lisa Park, People Operations",
            category: "Recognition",
            is_new: false,
            priority: Priority::Low,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink { title: "Leave Request", description: "Submit time off requests" },
        QuickLink { title: "HR Documents", description: "Access policies & forms" },
        QuickLink { title: "IT Support", description: "Get technical help" },
        QuickLink { title: "Directory", description: "Find team members" },
        QuickLink { title: "Expenses", description: "Submit expense reports" },
        QuickLink { title: "Security", description: "Access & permissions" },
        QuickLink { title: "Analytics", description: "View performance data" },
        QuickLink { title: "Settings", description: "Manage preferences" },
        QuickLink { title: "Email", description: "Internal messaging" },
        QuickLink { title: "Time Tracking", description: "Log work hours" },
        QuickLink { title: "Projects", description: "Manage tasks & projects" },
        QuickLink { title: "Break Room", description: "Social & wellness" },
    ]
}

#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Tasks Completed",
            value: "1,247",
            change: "+12%",
            positive: true,
        },
        StatCard {
            title: "Active Projects",
            value: "23",
            change: "+3",
            positive: true,
        },
        StatCard {
            title: "Team Members",
            value: "156",
            change: "+8",
            positive: true,
        },
        StatCard {
            title: "Avg. Response Time",
            value: "2.3h",
            change: "-15%",
            positive: true,
        },
    ]
}

/// Weekly task completion, consumed by the bar chart widget
pub fn weekly_tasks() -> Vec<(&'static str, u64)> {
    vec![
        ("Mon", 45),
        ("Tue", 52),
        ("Wed", 38),
        ("Thu", 61),
        ("Fri", 48),
    ]
}

/// Project status breakdown, consumed by the gauge row
pub fn project_breakdown() -> Vec<(&'static str, u64)> {
    vec![
        ("Completed", 45),
        ("In Progress", 30),
        ("Planning", 15),
        ("On Hold", 10),
    ]
}

/// Monthly team activity trend, consumed by the sparkline widget
pub fn team_activity() -> Vec<u64> {
    vec![65, 78, 82, 88]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_shape() {
        assert_eq!(events().len(), 4);
        assert_eq!(team_members().len(), 4);
        assert_eq!(news_items().len(), 4);
        assert_eq!(quick_links().len(), 12);
        assert_eq!(stat_cards().len(), 4);
    }

    #[test]
    fn test_news_ids_are_unique() {
        let items = news_items();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_event_ids_are_unique() {
        let items = events();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_project_breakdown_sums_to_100() {
        let total: u64 = project_breakdown().iter().map(|(_, v)| v).sum();
        assert_eq!(total, 100);
    }
}
