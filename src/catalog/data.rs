use super::Product;

pub static PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        title: "SNEHA & SAMRUDDHI HAMPER",
        description: "Add sweetness and prosperity to your celebrations with our Sneha & Samruddhi Hamper — a festive delight carefully crafted by Vanika Creations.

        This hamper combines indulgence with tradition, featuring:

        * Rasgulla & Gulab Jamun (classic Indian sweets)
        * Luxurious Ferrero Rocher chocolate
        * Flavorful Khatta Meetha Mixture
        * Crispy Sev Bhujia snack
        * Ganesh & Laxmi idols for divine blessings
        * Decorative festive diyas
        * Traditional toran for your home décor

        💫 A perfect blend of taste, culture, and festivity — ideal for gifting family, friends, and loved ones this Diwali.",
        images: &["/SNEHA_&_SAMRUDDHI_HAMPER.png"],
        price_range: "₹849 – ₹1049",
        article_id: "BB1020251",
    },
    Product {
        id: 2,
        title: "UTSAV HAMPER",
        description: "Celebrate the true spirit of festivity with our Utsav Hamper — a wholesome blend of health, taste, and tradition by *Vanika Creations*.

        This thoughtfully curated hamper includes:

        * Premium Almonds & Cashews 
        * Raisins & Apricots 
        * Pistachios 
        * Auspicious Shubh-Labh stickers
        * Decorative festive diyas
        * Traditional toran for home décor

        🌟 A perfect choice for sharing love, prosperity, and good health with your dear ones during this festive season.",
        images: &["/UTSAV_HAMPER.png"],
        price_range: "₹649 – ₹849",
        article_id: "BB1020252",
    },
    Product {
        id: 3,
        title: "GOLDEN GLOW LAKSHMI HAMPER",
        description: "Bring home prosperity and brightness this festive season with the Golden Glow Lakshmi Hamper. Thoughtfully curated with a mix of sweet, savory, and festive delights, it makes for the perfect Diwali gift for friends, family, and colleagues.

        This joyful hamper includes:

        * Indian Cookies
        * Refreshing Indian soft drinks/juices
        * Savory Snacks (Sev Bhujia, Kurkure)
        * Healthy Roasted Chana (cracker)
        * Crunchy Wafers
        * Fresh Fruit Cake
        * Decorative Festive Diyas
        * Traditional Toran

        ✨ A vibrant hamper that combines taste, tradition, and festivity — spreading happiness with every gift.",
        images: &["/GOLDEN_GLOW_LAKSHMI_HAMPER.png"],
        price_range: "₹499 – ₹799",
        article_id: "BB1020253",
    },
    Product {
        id: 4,
        title: "BANDHAN-E-KHUSHIYAN PACK",
        description: "Celebrate the bond of togetherness with the Bandhan-e-Khushiyan Pack. A perfect blend of premium dry fruits and festive essentials, this hamper is crafted to bring health, joy, and prosperity to your loved ones this Diwali.

        This elegant hamper includes:

        * Almonds and Cashews
        * Raisins and Apricot
        * Pistachio
        * Decorative Festive Diyas
        * Traditional Toran

        ✨ A premium choice for gifting that reflects love, tradition, and happiness in every detail.",
        images: &["/BANDHAN-E-KHUSHIYAN_PACK.png"],
        price_range: "₹849 – ₹1049",
        article_id: "T1020251",
    },
    Product {
        id: 5,
        title: "FAMILY FIESTA HAMPER",
        description: "Add warmth and delight to your family celebrations with the Family Fiesta Hamper. Thoughtfully curated with a mix of traditional treats and festive essentials, this hamper is perfect for sharing love and joy this Diwali.

        This festive hamper includes:

        * Almonds and Cashews
        * Crunchy Sev Bhujia
        * Traditional Indian Sweets
        * Lord Ganesh & Laxmi Idols
        * Shubh-Labh Stickers
        * Decorative Festive Diyas
        * Beautiful Toran

        ✨ An affordable yet meaningful gift that makes every family celebration more special.",
        images: &["/FAMILY_FIESTA_HAMPER.png"],
        price_range: "₹279 – ₹549",
        article_id: "B1020252",
    },
    Product {
        id: 6,
        title: "DIL SE DIWALI HAMPER",
        description: "Celebrate this Diwali with heartfelt gifting through our Dil Se Diwali Hamper — a thoughtfully curated festive box by Vanika Creations.

        This hamper brings together the perfect blend of tradition and indulgence:

        * Aauthentic Indian sweets
        * Premium almonds & cashews
        * A luxurious Ferrero Rocher chocolate
        * Classic Khatta Meetha Mixture
        * Beautiful Ganesh & Laxmi idols for blessings
        * Decorative festive diya
        * Traditional toran for your home

        💫 A wholesome gifting choice that combines taste, tradition, and festive charm — perfect for sharing joy with family, friends, and colleagues.",
        images: &["/DIL_SE_DIWALI_HAMPER.png"],
        price_range: "₹699 – ₹999",
        article_id: "B1020251",
    },
];
