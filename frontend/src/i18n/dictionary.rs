/// `(key, english, french)`.
pub(super) const ENTRIES: &[(&str, &str, &str)] = &[
    // navbar
    ("nav.live", "LIVE", "LIVE"),
    ("nav.technology", "TECHNOLOGY", "TECHNOLOGIE"),
    ("nav.gallery", "GALLERY", "GALERIE"),
    ("nav.contact", "CONTACT", "CONTACT"),
    ("nav.about", "ABOUT US", "À PROPOS"),
    ("nav.switchLanguage", "Passer en français", "Switch to English"),
    // hero
    ("hero.title", "LIVE", "LIVE"),
    (
        "hero.description",
        "A technology that enables the real-time generation of a continuous video from written or spoken prompts.",
        "Une technologie qui permet la génération en temps réel d'une vidéo continue à partir de prompts écrits ou parlés.",
    ),
    ("hero.discover", "Discover", "Découvrir"),
    // technology
    ("tech.title", "Technology", "Technologie"),
    (
        "tech.description",
        "Our platform combines artificial intelligence, signal processing and generative design to create unique real-time visual experiences.",
        "Notre plateforme combine intelligence artificielle, traitement du signal et design génératif pour créer des expériences visuelles uniques en temps réel.",
    ),
    ("tech.system", "System", "Système"),
    ("tech.realTime", "Real-time", "Temps réel"),
    ("tech.moderation", "Moderation", "Modération"),
    ("tech.safety", "Safety", "Sécurité"),
    ("tech.style", "Style", "Style"),
    ("tech.aesthetics", "Aesthetics", "Esthétique"),
    // system summary
    ("system.title", "System", "Système"),
    ("system.mode01", "Mode 01", "Mode 01"),
    ("system.mode02", "Mode 02", "Mode 02"),
    ("system.speechToVideo", "Speech to video", "Parole en vidéo"),
    (
        "system.speechDescription",
        "We turn spoken sentences into evolving visuals in real-time, driven by a microphone input.",
        "Nous transformons les phrases parlées en visuels évolutifs en temps réel, pilotés par une entrée microphone.",
    ),
    ("system.textToVideo", "Text to video", "Texte en vidéo"),
    (
        "system.textDescription",
        "We generate a continuous video from queued text prompts written by the audience.",
        "Nous générons une vidéo continue à partir de prompts texte en file d'attente écrits par le public.",
    ),
    // speech to video
    ("speech.title", "Speech to video", "Parole en vidéo"),
    (
        "speech.para1",
        "We created an experience where people can interact with an AI algorithm by speaking inside a microphone.",
        "Nous avons créé une expérience où les gens peuvent interagir avec un algorithme d'IA en parlant dans un microphone.",
    ),
    (
        "speech.para2",
        "The users speak a sentence in the microphone. The video will instantly evolve towards a visualisation of the sentence, and remain in an ever moving state until the next sentence is spoken.",
        "Les utilisateurs prononcent une phrase dans le microphone. La vidéo évoluera instantanément vers une visualisation de la phrase et restera dans un état en mouvement constant jusqu'à ce que la phrase suivante soit prononcée.",
    ),
    (
        "speech.bullet1",
        "This concept can be applied on any type of screen",
        "Ce concept peut être appliqué sur tout type d'écran",
    ),
    (
        "speech.bullet2",
        "The installation is configured to be 100% safe in terms of content with moderation",
        "L'installation est configurée pour être 100% sûre en termes de contenu avec modération",
    ),
    (
        "speech.bullet3",
        "The installation is self sufficient and does not need any internet connection",
        "L'installation est autonome et ne nécessite aucune connexion internet",
    ),
    // text to video
    ("text.title", "Text to video", "Texte en vidéo"),
    (
        "text.para1",
        "Generate continuous video content from text prompts in real-time.",
        "Générez du contenu vidéo continu à partir de prompts texte en temps réel.",
    ),
    (
        "text.para2",
        "Simply input your text description and watch as the AI transforms your words into dynamic, evolving visual content that adapts and flows seamlessly.",
        "Saisissez simplement votre description texte et observez l'IA transformer vos mots en contenu visuel dynamique et évolutif qui s'adapte et coule de manière fluide.",
    ),
    // moderation
    ("moderation.title", "Moderation", "Modération"),
    ("moderation.subtitle", "Live moderation system", "Système de modération en direct"),
    (
        "moderation.heading",
        "Layers of control working together",
        "Couches de contrôle travaillant ensemble",
    ),
    (
        "moderation.description",
        "Our moderation pipeline ensures that every Live experience remains safe, controlled, and aligned with each event's requirements. It combines automated analysis, curated rules, and human operator oversight.",
        "Notre pipeline de modération garantit que chaque expérience Live reste sûre, contrôlée et alignée avec les exigences de chaque événement. Il combine analyse automatisée, règles organisées et supervision d'un opérateur humain.",
    ),
    ("moderation.tag1", "AI training", "Formation IA"),
    ("moderation.tag2", "Automatic moderation", "Modération automatique"),
    ("moderation.tag3", "Operator controls", "Contrôles opérateur"),
    // style
    ("style.aesthetics", "Aesthetics", "Esthétique"),
    ("style.title", "Style", "Style"),
    (
        "style.description",
        "We can adapt the style of the generation with your artistic direction. It can match some color elements but also some patterns. All we need is a few inspiration images to adapt the style.",
        "Nous pouvons adapter le style de la génération à votre direction artistique. Il peut correspondre à certains éléments de couleur mais aussi à certains motifs. Tout ce dont nous avons besoin, ce sont quelques images d'inspiration pour adapter le style.",
    ),
    ("style.style1", "Style 1", "Style 1"),
    (
        "style.style1Desc",
        "Neon gradients for high-energy live shows.",
        "Dégradés néon pour les spectacles live haute énergie.",
    ),
    ("style.style2", "Style 2", "Style 2"),
    (
        "style.style2Desc",
        "Soft cinematic tones for immersive experiences.",
        "Tons cinématographiques doux pour des expériences immersives.",
    ),
    ("style.style3", "Style 3", "Style 3"),
    (
        "style.style3Desc",
        "Bold monochrome visuals for minimal setups.",
        "Visuels monochromes audacieux pour des configurations minimales.",
    ),
    // gallery
    ("gallery.title", "Gallery", "Galerie"),
    (
        "gallery.description",
        "Discover a selection of events that have used our Live technology in unique and creative ways. Each installation showcases a different approach to real-time AI video generation.",
        "Découvrez une sélection d'événements qui ont utilisé notre technologie Live de manière unique et créative. Chaque installation présente une approche différente de la génération vidéo IA en temps réel.",
    ),
    ("gallery.client", "Client", "Client"),
    ("gallery.location", "Location", "Lieu"),
    ("gallery.date", "Date", "Date"),
    ("gallery.lora", "Lora", "Lora"),
    ("gallery.role", "Role", "Rôle"),
    ("gallery.liveEvent", "Live Event", "Événement Live"),
    ("gallery.close", "Close", "Fermer"),
    ("gallery.empty", "The gallery is being updated.", "La galerie est en cours de mise à jour."),
    // contact
    ("contact.title", "Contact", "Contact"),
    (
        "contact.subtitle",
        "Let's create something amazing together",
        "Créons quelque chose d'extraordinaire ensemble",
    ),
    (
        "contact.wantToDesign",
        "Want to design your own Live experience? Let's talk.",
        "Vous voulez concevoir votre propre expérience Live ? Parlons-en.",
    ),
    ("contact.start", "Start", "Commencer"),
    ("contact.next", "Next", "Suivant"),
    ("contact.back", "Back", "Retour"),
    ("contact.submit", "Submit", "Envoyer"),
    ("contact.step", "Step", "Étape"),
    ("contact.of", "of", "sur"),
    ("contact.name", "What's your name?", "Quel est votre nom ?"),
    ("contact.howToReach", "How can we reach you?", "Comment pouvons-nous vous joindre ?"),
    ("contact.eventDate", "Date of your event", "Date de votre événement"),
    (
        "contact.whatKind",
        "What kind of Live experience do you want?",
        "Quel type d'expérience Live souhaitez-vous ?",
    ),
    (
        "contact.tellUs",
        "Tell us about your concept, the venue, and the type of screen.",
        "Parlez-nous de votre concept, du lieu et du type d'écran.",
    ),
    (
        "contact.loraQuestion",
        "Would you like us to create a Lora for you?",
        "Souhaitez-vous que nous créions un Lora pour vous ?",
    ),
    ("contact.yes", "Yes", "Oui"),
    ("contact.no", "No", "Non"),
    ("contact.text", "Text", "Texte"),
    ("contact.speech", "Speech", "Parole"),
    ("contact.yourName", "Your name", "Votre nom"),
    ("contact.emailPlaceholder", "your.email@example.com", "votre.email@exemple.com"),
    ("contact.datePlaceholder", "e.g., June 2026, Paris", "ex : juin 2026, Paris"),
    ("contact.describeConcept", "Describe your concept...", "Décrivez votre concept..."),
    ("contact.thankYou", "Thank you", "Merci"),
    (
        "contact.received",
        "We've received your request and will get in touch with you shortly.",
        "Nous avons reçu votre demande et vous contacterons sous peu.",
    ),
    ("contact.visitWebsite", "Visit our main website", "Visitez notre site principal"),
    // about
    ("about.title", "About", "À propos"),
    ("about.aboutUs", "About Us", "À propos de nous"),
    (
        "about.para1",
        "We are Obvious, a French trio of artists and researchers working with artificial intelligence to create art. Inspired by the Renaissance workshops, we operate at the crossroads of academic research and art.",
        "Nous sommes Obvious, un trio français d'artistes et de chercheurs travaillant avec l'intelligence artificielle pour créer de l'art. Inspirés par les ateliers de la Renaissance, nous opérons au carrefour de la recherche académique et de l'art.",
    ),
    (
        "about.para2",
        "Our research laboratory hosted in Sorbonne University is leading research in the fields of image, video and sound generation. We are behind the first artwork created using artificial intelligence to go through a major auction house (Christie's, 2018).",
        "Notre laboratoire de recherche hébergé à l'Université de la Sorbonne mène des recherches dans les domaines de la génération d'images, de vidéos et de sons. Nous sommes à l'origine de la première œuvre d'art créée à l'aide de l'intelligence artificielle à passer par une grande maison de vente aux enchères (Christie's, 2018).",
    ),
    // footer
    (
        "footer.description",
        "Creators of immersive live experiences through artificial intelligence and real-time generative design.",
        "Créateurs d'expériences live immersives grâce à l'intelligence artificielle et au design génératif en temps réel.",
    ),
    ("footer.navigation", "Navigation", "Navigation"),
    ("footer.contact", "Contact & Social", "Contact & Réseaux"),
    (
        "footer.copyright",
        "© 2025 Obvious. All rights reserved.",
        "© 2025 Obvious. Tous droits réservés.",
    ),
];

pub(super) fn lookup(key: &str) -> Option<(&'static str, &'static str)> {
    ENTRIES
        .iter()
        .find(|(entry, _, _)| *entry == key)
        .map(|(_, en, fr)| (*en, *fr))
}
