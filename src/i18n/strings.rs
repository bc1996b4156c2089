use crate::page::NavRoute;

/// Every display string the site shows in one language.
///
/// Content slots are keyed by name rather than struct field so that document
/// updaters can look them up from data attributes. Both bundles must carry the
/// same key set; `BundleValidator` checks this at startup.
#[derive(Debug, Clone, Copy)]
pub struct LocaleBundle {
    /// Primary navigation link texts
    pub nav: &'static [(NavRoute, &'static str)],

    /// Health-topic dropdown texts, keyed by category id
    pub dropdown: &'static [(&'static str, &'static str)],

    /// Free-form content slots
    pub content: &'static [(&'static str, &'static str)],
}

impl LocaleBundle {
    pub fn nav(&self, route: NavRoute) -> Option<&'static str> {
        self.nav
            .iter()
            .find(|(candidate, _)| *candidate == route)
            .map(|(_, text)| *text)
    }

    pub fn dropdown(&self, category_id: &str) -> Option<&'static str> {
        self.dropdown
            .iter()
            .find(|(id, _)| *id == category_id)
            .map(|(_, text)| *text)
    }

    /// Look up a content slot; `None` means the caller leaves the slot alone.
    pub fn content(&self, key: &str) -> Option<&'static str> {
        self.content
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, text)| *text)
    }

    pub fn content_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.content.iter().map(|(key, _)| *key)
    }
}

// ==================== English Strings ====================

/// English bundle (canonical)
pub const ENGLISH_BUNDLE: LocaleBundle = LocaleBundle {
    nav: &[
        (NavRoute::Home, "Home"),
        (NavRoute::Team, "Meet the Team"),
        (NavRoute::HealthCards, "Health Education Cards"),
        (NavRoute::Physicians, "Find a Physician"),
        (NavRoute::Contact, "Contact"),
    ],
    dropdown: &[
        ("cancer", "Cancer"),
        ("cardiovascular", "Cardiovascular Health"),
        ("chronic-illness", "Chronic Illness"),
        ("dental", "Dental Health"),
        ("infections", "Infections and Virus"),
        ("mental-health", "Mental Health"),
        ("preventative", "Preventative Care"),
        ("respiratory", "Respiratory Health"),
        ("sexual-health", "Sexual Health"),
    ],
    content: &[
        // Home
        ("heroTitle", "CHINATOWN HEALTH INITIATIVE"),
        ("heroSubtitle", "Northwestern University"),
        ("heroMeetTeamBtn", "Meet Our Team"),
        ("heroOurResourcesBtn", "Our Resources"),
        ("aboutTitle", "ABOUT"),
        ("aboutText", "Chinatown Health Initiative is an undergraduate student organization at Northwestern University founded to connect with residents and help promote access to healthcare access in the Chicago Chinatown area."),
        ("meetTeamBtn", "Meet Our Team"),
        ("whatWeDoTitle", "WHAT WE DO"),
        ("volunteerTitle", "VOLUNTEER"),
        ("volunteerText", "Partnering with community organizations in Chinatown as well as medical schools in the greater Chicagoland area, we volunteer regularly at community health fairs, health screenings, health education events, providing translation and logistical assistance."),
        ("infoDeskTitle", "HEALTH INFORMATION DESK"),
        ("infoDeskText", "We create and share health education resources for Chinatown residents, which has included establishing a health information desk at the Chinatown Public Library as a community platform."),
        ("publicEventsTitle", "PUBLIC EVENTS"),
        ("publicEventsText", "We host public events to engage with the Northwestern community and discuss issues relevant to public health."),
        ("socialsTitle", "SOCIALS/FOOD BONDING"),
        ("socialsText", "We love food! Every quarter we hold a fundraiser (buns, dumplings, tanghulu) to raise money for our initiatives and social events to foster community within our organization. We also take trips down to Chinatown to eat food and explore the community!"),
        ("resourcesTitle", "Our Resources"),
        ("viewResourcesBtn", "View Health Education Cards"),
        ("homeContactTitle", "CONTACT CHINATOWN HEALTH INITIATIVE"),
        ("contactText", "Have questions or want to get involved? Reach out to us!"),
        ("followUsText", "Follow us on Instagram"),
        // Team
        ("teamTitle", "Meet the Team"),
        ("teamSubtitle", "Meet the passionate students making healthcare accessible in our community"),
        ("teamDescription", "We're a diverse group of 25+ Northwestern students from different majors, backgrounds, and career paths, all united by our shared commitment to health equity. From pre-med students to computer science majors, we each bring unique skills to help our community thrive."),
        ("teamFunFact", "💡 Fun fact: Our team speaks over 8 different languages including Mandarin, Cantonese, Vietnamese, Korean, and Spanish - helping us serve families from diverse backgrounds throughout Chicago!"),
        ("joinTeamTitle", "Join Our Team"),
        ("joinTeamText", "Think you might want to join us? We're always looking for Northwestern students who care about health equity and want to make a real difference in our community. No prior experience needed - just bring your passion and willingness to learn! We meet every Tuesday at 7 PM in Norris."),
        // Contact
        ("contactTitle", "Contact Us"),
        ("contactSubtitle", "We'd love to hear from you!"),
        ("contactDescription", "Got questions about health resources in Chinatown? Want to volunteer with us? Or maybe you're a Northwestern student looking to get involved? We're here to help! Drop us a line and we'll get back to you within 24 hours."),
        ("contactFormTitle", "Drop Us a Line"),
        ("formNameLabel", "Name"),
        ("formEmailLabel", "Email"),
        ("formMessageLabel", "Message"),
        ("formSubmitBtn", "Send Message"),
        // Health cards
        ("healthCardsTitle", "All Health Education Cards"),
        ("healthCardsSubtitle", "Comprehensive health information resources for the community"),
        ("healthCardsDescription", "We've created these health education materials based on the most common questions we hear from families at our health information desk. Each card is written in simple language, translated by native speakers, and reviewed by healthcare professionals to ensure accuracy."),
        ("healthCardsNote", "All resources are available in both English and Chinese. Use the language toggle button to switch languages."),
        ("needHelpTitle", "Need Help Finding Resources?"),
        ("needHelpText", "Visit our health information desk at the Chinatown Public Library or contact us for assistance."),
        ("contactUsBtn", "Contact Us"),
        ("resourcesEmpty", "Resources for this category are coming soon."),
        ("downloadLabel", "Download PDF"),
        ("cancer", "Cancer Information Cards"),
        ("heart", "Heart Health Cards"),
        ("chronic-illness", "Chronic Illness Cards"),
        ("dental", "Dental Health Cards"),
        ("infections", "Infections and Virus Cards"),
        ("mental-health", "Mental Health Cards"),
        ("preventative", "Preventative Care Cards"),
        ("respiratory", "Respiratory Health Cards"),
        ("sexual-health", "Sexual Health Cards"),
        // Physicians
        ("physiciansTitle", "Find a Chinese-Speaking Physician"),
        ("physiciansSubtitle", "Physicians in the Chicago area who speak Mandarin or Cantonese"),
        ("physiciansDescription", "Use the map below to find physicians near Chinatown. Click a marker to see the physician's specialty, address, and phone number."),
        ("physiciansMapNote", "This list is provided for information only and is not a medical referral."),
        ("specialtyLabel", "Specialty"),
        ("addressLabel", "Address"),
        ("phoneLabel", "Phone"),
        // Footer
        ("footerText", "© Chinatown Health Initiative, Northwestern University"),
    ],
};

// ==================== Chinese Strings ====================

/// Traditional Chinese bundle
pub const CHINESE_BUNDLE: LocaleBundle = LocaleBundle {
    nav: &[
        (NavRoute::Home, "首頁"),
        (NavRoute::Team, "認識團隊"),
        (NavRoute::HealthCards, "健康教育卡片"),
        (NavRoute::Physicians, "尋找醫生"),
        (NavRoute::Contact, "聯絡我們"),
    ],
    dropdown: &[
        ("cancer", "癌症"),
        ("cardiovascular", "心血管健康"),
        ("chronic-illness", "慢性病"),
        ("dental", "牙科健康"),
        ("infections", "感染和病毒"),
        ("mental-health", "心理健康"),
        ("preventative", "預防保健"),
        ("respiratory", "呼吸系統健康"),
        ("sexual-health", "性健康"),
    ],
    content: &[
        // Home
        ("heroTitle", "唐人街健康倡議"),
        ("heroSubtitle", "西北大學"),
        ("heroMeetTeamBtn", "認識我們的團隊"),
        ("heroOurResourcesBtn", "我們的資源"),
        ("aboutTitle", "關於我們"),
        ("aboutText", "唐人街健康倡議是西北大學的本科生學生組織，旨在與居民聯繫並幫助促進芝加哥唐人街地區的醫療保健服務。"),
        ("meetTeamBtn", "認識我們的團隊"),
        ("whatWeDoTitle", "我們的工作"),
        ("volunteerTitle", "志願服務"),
        ("volunteerText", "我們與唐人街的社區組織以及大芝加哥地區的醫學院合作，定期在社區健康博覽會、健康篩查、健康教育活動中擔任志願者，提供翻譯和後勤協助。"),
        ("infoDeskTitle", "健康資訊台"),
        ("infoDeskText", "我們為唐人街居民創建和分享健康教育資源，包括在唐人街公共圖書館建立健康資訊台作為社區平台。"),
        ("publicEventsTitle", "公開活動"),
        ("publicEventsText", "我們舉辦公開活動，與西北大學社區互動，討論與公共衛生相關的問題。"),
        ("socialsTitle", "社交/美食聚會"),
        ("socialsText", "我們熱愛美食！每個季度我們都會舉辦募款活動（包子、餃子、糖葫蘆）來為我們的倡議籌集資金，並舉辦社交活動來培養我們組織內的社區感。我們也會去唐人街吃美食和探索社區！"),
        ("resourcesTitle", "我們的資源"),
        ("viewResourcesBtn", "查看健康教育卡片"),
        ("homeContactTitle", "聯絡唐人街健康倡議"),
        ("contactText", "有問題或想參與嗎？聯繫我們！"),
        ("followUsText", "在Instagram上關注我們"),
        // Team
        ("teamTitle", "認識團隊"),
        ("teamSubtitle", "認識讓醫療保健在我們社區中變得可及的熱情學生"),
        ("teamDescription", "我們是一群來自不同專業、背景和職業道路的25多名西北大學學生，都因對健康公平的共同承諾而團結在一起。從預科生到計算機科學專業學生，我們每個人都帶來獨特的技能來幫助我們的社區繁榮發展。"),
        ("teamFunFact", "💡 有趣的事實：我們的團隊會說超過8種不同的語言，包括普通話、粵語、越南語、韓語和西班牙語 - 幫助我們為芝加哥各地不同背景的家庭提供服務！"),
        ("joinTeamTitle", "加入我們的團隊"),
        ("joinTeamText", "想加入我們嗎？我們一直在尋找關心健康公平並想在我們社區中產生真正影響的西北大學學生。不需要經驗 - 只需要您的熱情和學習意願！我們每週二晚上7點在諾里斯見面。"),
        // Contact
        ("contactTitle", "聯繫我們"),
        ("contactSubtitle", "我們很想聽到您的消息！"),
        ("contactDescription", "對唐人街的健康資源有疑問嗎？想與我們一起做志願者嗎？或者您可能是正在尋找參與機會的西北大學學生？我們在這裡提供幫助！給我們留言，我們會在24小時內回覆您。"),
        ("contactFormTitle", "給我們留言"),
        ("formNameLabel", "姓名"),
        ("formEmailLabel", "電子郵件"),
        ("formMessageLabel", "訊息"),
        ("formSubmitBtn", "發送訊息"),
        // Health cards
        ("healthCardsTitle", "所有健康教育卡片"),
        ("healthCardsSubtitle", "為社區提供全面的健康信息資源"),
        ("healthCardsDescription", "我們根據在健康資訊台聽到的家庭最常見問題創建了這些健康教育材料。每張卡片都用簡單的語言編寫，由母語人士翻譯，並由醫療保健專業人士審查以確保準確性。"),
        ("healthCardsNote", "所有資源都有英文和中文版本。使用語言切換按鈕來切換語言。"),
        ("needHelpTitle", "需要幫助尋找資源嗎？"),
        ("needHelpText", "請訪問唐人街公共圖書館的健康資訊台或聯繫我們尋求幫助。"),
        ("contactUsBtn", "聯繫我們"),
        ("resourcesEmpty", "此類別的資源即將推出。"),
        ("downloadLabel", "下載PDF"),
        ("cancer", "癌症資料卡"),
        ("heart", "心臟健康卡"),
        ("chronic-illness", "慢性病健康卡"),
        ("dental", "牙科健康卡"),
        ("infections", "感染和病毒健康卡"),
        ("mental-health", "心理健康卡"),
        ("preventative", "預防保健卡"),
        ("respiratory", "呼吸系統健康卡"),
        ("sexual-health", "性健康卡"),
        // Physicians
        ("physiciansTitle", "尋找說中文的醫生"),
        ("physiciansSubtitle", "芝加哥地區會說普通話或粵語的醫生"),
        ("physiciansDescription", "使用下方地圖尋找唐人街附近的醫生。點擊標記即可查看醫生的專科、地址和電話號碼。"),
        ("physiciansMapNote", "此列表僅供參考，並非醫療轉介。"),
        ("specialtyLabel", "專科"),
        ("addressLabel", "地址"),
        ("phoneLabel", "電話"),
        // Footer
        ("footerText", "© 唐人街健康倡議，西北大學"),
    ],
};
