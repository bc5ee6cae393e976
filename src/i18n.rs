use crate::tracking::Section;

/// Languages the site ships. Hebrew is the default and renders right-to-left.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    En,
    He,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::He => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::He
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::He,
            Language::He => Language::En,
        }
    }

    /// Label for the toggle button: always names the *other* language.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "עברית",
            Language::He => "English",
        }
    }
}

#[derive(PartialEq)]
pub struct NavText {
    pub home: &'static str,
    pub projects: &'static str,
    pub skills: &'static str,
    pub trust: &'static str,
    pub contact: &'static str,
}

impl NavText {
    pub fn label(&self, section: Section) -> &'static str {
        match section {
            Section::Home => self.home,
            Section::Projects => self.projects,
            Section::Skills => self.skills,
            Section::Trust => self.trust,
            Section::Contact => self.contact,
        }
    }
}

#[derive(PartialEq)]
pub struct HeroText {
    pub badge: &'static str,
    pub title1: &'static str,
    pub title2: &'static str,
    pub desc: &'static str,
    pub btn1: &'static str,
    pub btn2: &'static str,
}

#[derive(PartialEq)]
pub struct CardText {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(PartialEq)]
pub struct ProjectsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub items: [CardText; 3],
}

#[derive(PartialEq)]
pub struct SkillsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge_recommended: &'static str,
    pub items: [CardText; 7],
}

#[derive(PartialEq)]
pub struct TrustText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub story: &'static str,
}

#[derive(PartialEq)]
pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub budget: &'static str,
    pub budget_hint: &'static str,
    pub file_label: &'static str,
    pub file_hint: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_message: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

#[derive(PartialEq)]
pub struct FooterText {
    pub copyright: &'static str,
}

#[derive(PartialEq)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub projects: ProjectsText,
    pub skills: SkillsText,
    pub trust: TrustText,
    pub contact: ContactText,
    pub footer: FooterText,
}

/// Resolve the translation table for a language. The tables are plain static
/// data handed to components as values, so tests can substitute fixtures.
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::En => &EN,
        Language::He => &HE,
    }
}

static EN: Translations = Translations {
    nav: NavText {
        home: "Home",
        projects: "Work",
        skills: "Services",
        trust: "Why Me",
        contact: "Contact",
    },
    hero: HeroText {
        badge: "Available for New Projects",
        title1: "I Build Software That Works",
        title2: "and people actually want to use",
        desc: "I'm Idan, a frontend developer based in Israel. I work closely with founders and teams to turn ideas into solid web and mobile products — no fluff, no surprises.",
        btn1: "Let's Talk",
        btn2: "See What I Do",
    },
    projects: ProjectsText {
        title: "What I Build",
        subtitle: "I've shipped dashboards, apps, and integrations for businesses at different stages. Here's the kind of work I do.",
        cta: "Need something like this?",
        items: [
            CardText {
                title: "Business Dashboards",
                desc: "Internal tools and dashboards that actually get used. Clean data views, workflow automation, and interfaces your team won't need training for.",
            },
            CardText {
                title: "User-Facing Apps",
                desc: "Web and mobile apps built to feel right. I focus on the small things — load times, transitions, error states — that make the difference between 'meh' and 'wow'.",
            },
            CardText {
                title: "Third-Party Integrations",
                desc: "Payment providers, analytics, CRMs, APIs — I connect your product to the tools it needs. Done properly so it doesn't break when they update.",
            },
        ],
    },
    skills: SkillsText {
        title: "What Working With Me Looks Like",
        subtitle: "I don't just write code and disappear. Here's what you get.",
        badge_recommended: "Recommended",
        items: [
            CardText {
                title: "Product Thinking",
                desc: "I'll push back when something doesn't make sense and suggest better approaches. You get a thinking partner, not just a pair of hands.",
            },
            CardText {
                title: "Clean User Interfaces",
                desc: "React, React Native, responsive design — I build interfaces that feel fast and look right on every screen.",
            },
            CardText {
                title: "Code That Lasts",
                desc: "I write code that the next developer (or future-you) can actually read and extend. No clever hacks, no tech debt shortcuts.",
            },
            CardText {
                title: "Straight Communication",
                desc: "Weekly updates, honest timelines, no ghosting. If something's going sideways, you'll hear about it early.",
            },
            CardText {
                title: "Solid Architecture",
                desc: "API integrations, state management, performance — the behind-the-scenes stuff that keeps your app running smoothly as it grows.",
            },
            CardText {
                title: "Support After Launch",
                desc: "I stick around after delivery. Bug fixes, small tweaks, questions about next steps — I'm not hard to reach.",
            },
            CardText {
                title: "Honest Consultation",
                desc: "Sometimes the answer is 'don't build it from scratch.' I'll tell you when a Shopify store or a no-code tool gets you there faster and cheaper.",
            },
        ],
    },
    trust: TrustText {
        title: "My Approach",
        subtitle: "In short.",
        story: "I'd rather save you money now and build the right thing — even if it means I earn less. My goal isn't to sell hours. It's to find you the best solution.",
    },
    contact: ContactText {
        title: "Got a Project?",
        subtitle: "Tell me what you're working on. Even if you're still figuring it out — happy to think through it together.",
        name: "Your Name *",
        email: "Email Address *",
        message: "Your Message *",
        budget: "Estimated Budget",
        budget_hint: "Select a range",
        file_label: "Attach Design/Docs (Optional)",
        file_hint: "Upload file(s)",
        placeholder_name: "John Doe",
        placeholder_message: "Tell me about your project...",
        send: "Send Message",
        sending: "Sending...",
        success: "✓ Message sent! I'll be in touch soon.",
        error: "✗ Something went wrong. Try again or email me directly.",
    },
    footer: FooterText {
        copyright: "© 2026 Idan Levian",
    },
};

static HE: Translations = Translations {
    nav: NavText {
        home: "בית",
        projects: "עבודות",
        skills: "שירותים",
        trust: "למה אני?",
        contact: "צור קשר",
    },
    hero: HeroText {
        badge: "זמין לפרויקטים חדשים",
        title1: "אני בונה תוכנה שעובדת",
        title2: "ושאנשים באמת רוצים להשתמש בה",
        desc: "אני עידן, מפתח פרונטאנד מישראל. אני עובד צמוד עם מייסדים וצוותים כדי להפוך רעיונות למוצרים דיגיטליים אמיתיים — בלי סיבוכים, בלי הפתעות.",
        btn1: "בואו נדבר",
        btn2: "מה אני עושה",
    },
    projects: ProjectsText {
        title: "מה אני בונה",
        subtitle: "בניתי דשבורדים, אפליקציות ואינטגרציות לעסקים בשלבים שונים. הנה סוג העבודה שאני עושה.",
        cta: "צריכים משהו כזה?",
        items: [
            CardText {
                title: "דשבורדים עסקיים",
                desc: "כלים פנימיים ודשבורדים שבאמת משתמשים בהם. תצוגות נתונים ברורות, אוטומציה של תהליכים וממשקים שהצוות שלכם לא צריך הדרכה בשבילם.",
            },
            CardText {
                title: "אפליקציות למשתמשים",
                desc: "אפליקציות ווב ומובייל שמרגישות נכון. אני מתמקד בדברים הקטנים — זמני טעינה, מעברים, טיפול בשגיאות — שעושים את ההבדל.",
            },
            CardText {
                title: "אינטגרציות צד שלישי",
                desc: "ספקי תשלום, אנליטיקה, CRM, ממשקי API — אני מחבר את המוצר שלכם לכלים שהוא צריך. בצורה יציבה שלא נשברת כשהם מתעדכנים.",
            },
        ],
    },
    skills: SkillsText {
        title: "איך זה לעבוד איתי",
        subtitle: "אני לא סתם כותב קוד ונעלם. הנה מה שאתם מקבלים.",
        badge_recommended: "מומלץ",
        items: [
            CardText {
                title: "חשיבת מוצר",
                desc: "אני אתריע כשמשהו לא הגיוני ואציע גישה טובה יותר. אתם מקבלים שותף חושב, לא רק מבצע.",
            },
            CardText {
                title: "ממשקים נקיים",
                desc: "React, React Native, עיצוב רספונסיבי — אני בונה ממשקים שמרגישים מהירים ונראים נכון בכל מסך.",
            },
            CardText {
                title: "קוד שמחזיק מעמד",
                desc: "אני כותב קוד שהמפתח הבא (או אתם בעתיד) יכולים לקרוא ולהרחיב. בלי טריקים חכמים, בלי קיצורי דרך.",
            },
            CardText {
                title: "תקשורת ישירה",
                desc: "עדכונים שבועיים, לוחות זמנים כנים, בלי היעלמויות. אם משהו לא הולך לפי התוכנית, תשמעו על זה מוקדם.",
            },
            CardText {
                title: "ארכיטקטורה יציבה",
                desc: "אינטגרציות API, ניהול סטייט, ביצועים — הדברים מאחורי הקלעים ששומרים על האפליקציה שלכם תקינה כשהיא גדלה.",
            },
            CardText {
                title: "תמיכה אחרי ההשקה",
                desc: "אני נשאר בסביבה אחרי המסירה. תיקוני באגים, שינויים קטנים, שאלות על השלב הבא — אני זמין.",
            },
            CardText {
                title: "ייעוץ כנה",
                desc: "לפעמים התשובה היא ״אל תבנו מאפס.״ אני אגיד לכם כשחנות שופיפיי או כלי no-code מגיעים לשם מהר יותר ובזול יותר.",
            },
        ],
    },
    trust: TrustText {
        title: "הגישה שלי",
        subtitle: "בקצרה.",
        story: "אני מעדיף שתחסכו כסף עכשיו ותבנו נכון — גם אם זה אומר שאני מרוויח פחות. המטרה שלי היא לא למכור שעות, אלא למצוא לכם את הפתרון הנכון ביותר.",
    },
    contact: ContactText {
        title: "יש לכם פרויקט?",
        subtitle: "ספרו לי על מה אתם עובדים. גם אם עדיין לא בטוחים בכיוון — אשמח לחשוב על זה ביחד.",
        name: "השם שלך *",
        email: "כתובת אימייל *",
        message: "ההודעה שלך *",
        budget: "תקציב מוערך",
        budget_hint: "בחרו טווח",
        file_label: "צרפו אפיון/עיצוב (אופציונלי)",
        file_hint: "צרפו קבצים",
        placeholder_name: "ישראל ישראלי",
        placeholder_message: "ספרו לי על הפרויקט שלכם...",
        send: "שלחו הודעה",
        sending: "שולח...",
        success: "✓ ההודעה נשלחה בהצלחה!",
        error: "✗ משהו השתבש. נסו שוב או שלחו לי מייל ישירות.",
    },
    footer: FooterText {
        copyright: "© 2026 עידן לוויאן",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_the_two_languages() {
        assert_eq!(Language::En.toggled(), Language::He);
        assert_eq!(Language::He.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn hebrew_renders_right_to_left() {
        assert_eq!(Language::He.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert!(Language::He.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn every_section_has_a_nav_label_in_both_languages() {
        for lang in [Language::En, Language::He] {
            let nav = &translations(lang).nav;
            for section in Section::ALL {
                assert!(!nav.label(section).is_empty());
            }
        }
    }
}
