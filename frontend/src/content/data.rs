//! Static content shipped with the site. Every remote query falls back to one
//! of these records when the content service is unavailable.

use crate::components::icon::IconName;
use crate::content::model::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        name: "Cortex Digital".into(),
        tagline: "Transform Your Digital Presence".into(),
        description: "Enterprise-grade digital solutions that drive growth and innovation.".into(),
    }
}

pub fn navigation() -> Vec<NavItem> {
    [
        ("home", "Home", "/"),
        ("features", "Features", "/features"),
        ("pricing", "Pricing", "/pricing"),
        ("testimonials", "Testimonials", "/testimonials"),
        ("projects", "Projects", "/projects"),
        ("faq", "FAQ", "/faq"),
        ("contact", "Contact", "/contact"),
    ]
    .iter()
    .map(|(id, label, href)| NavItem {
        id: id.to_string(),
        label: label.to_string(),
        href: href.to_string(),
        children: Vec::new(),
    })
    .collect()
}

pub fn hero() -> HeroContent {
    HeroContent {
        title: "Build The Future of".into(),
        highlight: "Digital Excellence".into(),
        subtitle: "Empower your business with cutting-edge solutions designed for scale. From startups to enterprises, we deliver technology that transforms.".into(),
        background_video: None,
        cta: Link { label: "Get Started Free".into(), href: "/register".into() },
        secondary_cta: Link { label: "View Demo".into(), href: "/features".into() },
    }
}

pub fn features() -> Vec<Feature> {
    [
        (IconName::Zap, "Lightning Performance", "Optimized infrastructure delivering sub-100ms response times globally with 99.99% uptime guarantee."),
        (IconName::Shield, "Enterprise Security", "Bank-grade encryption, SOC2 compliance, and advanced threat detection to protect your data."),
        (IconName::BarChart3, "Advanced Analytics", "Real-time insights and predictive analytics to drive data-informed decision making."),
        (IconName::Workflow, "Seamless Integration", "Connect with 500+ tools and platforms. REST APIs, webhooks, and native integrations."),
        (IconName::Users, "Team Collaboration", "Built-in workflows for teams of any size. Real-time sync, comments, and version control."),
        (IconName::Globe, "Global Scale", "Deploy to 40+ edge locations worldwide. Auto-scaling that handles millions of requests."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (icon, title, description))| Feature {
        id: (i + 1).to_string(),
        icon,
        title: title.into(),
        description: description.into(),
    })
    .collect()
}

pub fn pricing() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "starter".into(),
            name: "Starter".into(),
            price: "$29".into(),
            period: "/month".into(),
            description: "Perfect for small teams getting started".into(),
            features: strings(&[
                "Up to 5 team members",
                "10GB storage",
                "Basic analytics",
                "Email support",
                "API access",
            ]),
            highlighted: false,
            cta: "Start Free Trial".into(),
        },
        PricingPlan {
            id: "professional".into(),
            name: "Professional".into(),
            price: "$99".into(),
            period: "/month".into(),
            description: "For growing teams that need more power".into(),
            features: strings(&[
                "Up to 25 team members",
                "100GB storage",
                "Advanced analytics",
                "Priority support",
                "Full API access",
                "Custom integrations",
                "SSO authentication",
            ]),
            highlighted: true,
            cta: "Start Free Trial".into(),
        },
        PricingPlan {
            id: "enterprise".into(),
            name: "Enterprise".into(),
            price: "Custom".into(),
            period: String::new(),
            description: "For large organizations with specific needs".into(),
            features: strings(&[
                "Unlimited team members",
                "Unlimited storage",
                "Enterprise analytics",
                "24/7 dedicated support",
                "Custom development",
                "On-premise option",
                "SLA guarantee",
                "Security audit",
            ]),
            highlighted: false,
            cta: "Contact Sales".into(),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        ("Sarah Chen", "CTO", "TechVentures Inc",
         "Cortex Digital transformed our entire infrastructure. We've seen a 300% improvement in deployment speed and our team productivity has skyrocketed.",
         "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop&crop=face"),
        ("Marcus Johnson", "VP Engineering", "ScaleUp Solutions",
         "The security features alone made the switch worth it. We passed our SOC2 audit with flying colors thanks to Cortex Digital's robust security framework.",
         "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face"),
        ("Emily Rodriguez", "Product Director", "Innovation Labs",
         "The analytics dashboard gives us insights we never had before. We've increased our conversion rate by 150% since implementing their solutions.",
         "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face"),
        ("David Kim", "Founder & CEO", "NextGen Startup",
         "As a startup, we needed something that could scale with us. Cortex Digital exceeded all expectations. Their support team is phenomenal.",
         "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, role, company, content, avatar))| Testimonial {
        id: (i + 1).to_string(),
        name: name.into(),
        role: role.into(),
        company: company.into(),
        content: content.into(),
        avatar: avatar.into(),
        rating: 5,
    })
    .collect()
}

pub fn faqs() -> Vec<Faq> {
    [
        ("How quickly can we get started?",
         "You can be up and running within minutes. Our onboarding process is streamlined, and we offer free migration assistance for enterprise customers."),
        ("Is there a free trial available?",
         "Yes! All plans come with a 14-day free trial, no credit card required. You'll have full access to all features during the trial period."),
        ("How does pricing work for larger teams?",
         "We offer volume discounts for larger teams. Contact our sales team for custom pricing that fits your organization's needs."),
        ("What kind of support do you offer?",
         "We provide email support for all plans, priority support for Professional, and 24/7 dedicated support with a named account manager for Enterprise customers."),
        ("Can I export my data?",
         "Absolutely. You own your data. We provide easy export tools in multiple formats, and our team can assist with any migration needs."),
        ("Do you offer custom integrations?",
         "Yes, our Professional and Enterprise plans include custom integration development. We also have a robust API for building your own integrations."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (question, answer))| Faq {
        id: (i + 1).to_string(),
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

pub fn projects() -> Vec<Project> {
    [
        ("E-Commerce Platform Redesign", "Web Development",
         "Complete redesign and rebuild of a major retail platform, resulting in 200% increase in mobile conversions.",
         "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
         &["React", "Node.js", "AWS"][..]),
        ("FinTech Dashboard", "SaaS",
         "Real-time financial analytics dashboard processing millions of transactions daily.",
         "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
         &["TypeScript", "GraphQL", "PostgreSQL"][..]),
        ("Healthcare Management System", "Enterprise",
         "HIPAA-compliant patient management system serving 50+ healthcare facilities.",
         "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&h=600&fit=crop",
         &["Python", "React", "Azure"][..]),
        ("AI-Powered Marketing Suite", "AI/ML",
         "Machine learning platform for automated marketing campaign optimization.",
         "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop",
         &["TensorFlow", "Python", "GCP"][..]),
        ("Logistics Tracking Platform", "Enterprise",
         "Real-time fleet management and delivery tracking for a global logistics company.",
         "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=800&h=600&fit=crop",
         &["Go", "Kubernetes", "Redis"][..]),
        ("Social Media Analytics", "SaaS",
         "Comprehensive social media analytics platform with sentiment analysis.",
         "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=800&h=600&fit=crop",
         &["Next.js", "Python", "MongoDB"][..]),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, category, description, image, tags))| Project {
        id: (i + 1).to_string(),
        title: title.into(),
        category: category.into(),
        description: description.into(),
        image: image.into(),
        tags: strings(tags),
    })
    .collect()
}

pub fn contact() -> ContactInfo {
    ContactInfo {
        email: "hello@cortexdigital.com".into(),
        phone: "+1 (555) 123-4567".into(),
        address: "123 Innovation Drive, Tech City, TC 12345".into(),
        socials: [
            ("Twitter", IconName::Twitter),
            ("LinkedIn", IconName::Linkedin),
            ("GitHub", IconName::Github),
        ]
        .into_iter()
        .map(|(platform, icon)| SocialLink {
            platform: platform.into(),
            url: "#".into(),
            icon,
        })
        .collect(),
    }
}
