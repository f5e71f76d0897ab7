//! Read-only content and asset tables. Owned by the application context
//! and handed to the views; nothing in here mutates after startup.

#[derive(Clone, Debug)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub photo: String,
    pub resume: String,
}

#[derive(Clone, Debug)]
pub struct Project {
    pub name: String,
    pub summary: String,
    pub category: String,
    pub image: String,
    pub link: String,
}

#[derive(Clone, Debug)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, drives the level bar width.
    pub level: u8,
}

#[derive(Clone, Debug)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct SiteContent {
    pub profile: Profile,
    pub typewriter_titles: Vec<String>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub social: Vec<SocialLink>,
}

impl SiteContent {
    pub fn built_in() -> Self {
        let skill = |name: &str, level: u8| Skill {
            name: name.to_owned(),
            level,
        };
        Self {
            profile: Profile {
                name: "Sam Varma".to_owned(),
                tagline: "Building things for the web, one pixel at a time.".to_owned(),
                about: "Developer and designer with a soft spot for generative \
                        visuals. I build full-stack web applications by day and \
                        fiddle with particle systems by night."
                    .to_owned(),
                email: "hello@samvarma.dev".to_owned(),
                photo: "assets/images/profile/profile-photo.jpg".to_owned(),
                resume: "assets/documents/resume.pdf".to_owned(),
            },
            typewriter_titles: vec![
                "Web Developer".to_owned(),
                "Python Programmer".to_owned(),
                "Multimedia Designer".to_owned(),
                "Full-Stack Developer".to_owned(),
            ],
            projects: vec![
                Project {
                    name: "Hybrid AI Translator".to_owned(),
                    summary: "Neural + rule-based translation pipeline with a live \
                              editing interface."
                        .to_owned(),
                    category: "programming".to_owned(),
                    image: "assets/images/projects/hybrid-ai-translator.jpg".to_owned(),
                    link: "https://github.com/samvarma/hybrid-ai-translator".to_owned(),
                },
                Project {
                    name: "AlumNet".to_owned(),
                    summary: "Alumni networking platform: profiles, mentorship \
                              matching and event boards."
                        .to_owned(),
                    category: "web".to_owned(),
                    image: "assets/images/projects/alumnet.jpg".to_owned(),
                    link: "https://github.com/samvarma/alumnet".to_owned(),
                },
                Project {
                    name: "Revive Peace".to_owned(),
                    summary: "Campaign site with scroll-driven storytelling and \
                              donation flows."
                        .to_owned(),
                    category: "web".to_owned(),
                    image: "assets/images/projects/revive-peace.jpg".to_owned(),
                    link: "https://github.com/samvarma/revive-peace".to_owned(),
                },
                Project {
                    name: "Product Trust Analyzer".to_owned(),
                    summary: "Review-mining tool scoring product listings for \
                              astroturfing signals."
                        .to_owned(),
                    category: "programming".to_owned(),
                    image: "assets/images/projects/product-trust-analyzer.jpg".to_owned(),
                    link: "https://github.com/samvarma/product-trust-analyzer".to_owned(),
                },
            ],
            skill_categories: vec![
                SkillCategory {
                    key: "web".to_owned(),
                    title: "Web".to_owned(),
                    skills: vec![
                        skill("HTML & CSS", 90),
                        skill("JavaScript", 85),
                        skill("React", 75),
                    ],
                },
                SkillCategory {
                    key: "programming".to_owned(),
                    title: "Programming".to_owned(),
                    skills: vec![
                        skill("Python", 85),
                        skill("Rust", 70),
                        skill("SQL", 75),
                    ],
                },
                SkillCategory {
                    key: "multimedia".to_owned(),
                    title: "Multimedia".to_owned(),
                    skills: vec![
                        skill("Video Editing", 80),
                        skill("Motion Graphics", 65),
                        skill("Photography", 70),
                    ],
                },
            ],
            social: vec![
                SocialLink {
                    label: "GitHub".to_owned(),
                    url: "https://github.com/samvarma".to_owned(),
                },
                SocialLink {
                    label: "LinkedIn".to_owned(),
                    url: "https://linkedin.com/in/samvarma".to_owned(),
                },
                SocialLink {
                    label: "Twitter".to_owned(),
                    url: "https://twitter.com/samvarma".to_owned(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_category_has_a_skill_category() {
        let content = SiteContent::built_in();
        for project in &content.projects {
            assert!(
                content
                    .skill_categories
                    .iter()
                    .any(|c| c.key == project.category),
                "project {} has unknown category {}",
                project.name,
                project.category
            );
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        let content = SiteContent::built_in();
        for category in &content.skill_categories {
            assert!(!category.skills.is_empty());
            for skill in &category.skills {
                assert!(skill.level <= 100);
            }
        }
    }
}
