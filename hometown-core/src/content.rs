// Static marketing copy shown on the home page

#[derive(Debug)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug)]
pub struct Article {
    pub title: &'static str,
    pub intro: &'static [&'static str],
    pub lead: Section,
    pub sections: &'static [Section],
}

impl Article {
    pub fn headings(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.lead.heading).chain(self.sections.iter().map(|s| s.heading))
    }

    /// Title, paragraphs and headings as plain text, blocks separated by
    /// blank lines
    pub fn plain_text(&self) -> String {
        let mut blocks: Vec<&str> = vec![self.title];
        blocks.extend(self.intro.iter().copied());
        for section in std::iter::once(&self.lead).chain(self.sections.iter()) {
            blocks.push(section.heading);
            blocks.extend(section.paragraphs.iter().copied());
        }
        blocks.join("\n\n")
    }
}

pub static HOMETOWN_STORY: Article = Article {
    title: "HomeTown, one of the best online furniture & home décor stores in India",
    intro: &[
        "At HomeTown, our stunning furniture and home décor are designed to fit \
         effortlessly into any style, from minimalistic and modern to bold and \
         eclectic. With a wide range of colors, finishes, and designs, you’ll \
         always find something that complements your home perfectly.",
        "If you think of your home as a work of art, then you’ve likely spent \
         years collecting and curating pieces that speak to you, that tell a \
         story and make your home unique. So, it makes sense that when you find \
         the ideal piece, you want it to be something that will last for \
         generations!",
        "That’s why we combine authentic craftsmanship with modern materials to \
         bring you furniture that’s built to last. Each piece is thoughtfully \
         designed and meticulously crafted with attention to detail offering \
         lasting quality, timeless style, and affordability that fits your \
         budget.",
    ],
    lead: Section {
        heading: "Explore our range of home furniture online",
        paragraphs: &[
            "Inspired by the power of design to transform ordinary spaces into \
             extraordinary lifestyles, we partner with you to create your unique \
             ambience. We take pride in offering a curated selection of top-quality \
             home furnishings for every room, style and budget on our online \
             furniture store.",
        ],
    },
    sections: &[
        Section {
            heading: "Kitchen Furniture",
            paragraphs: &[
                "A stylish kitchen is a perfect place to cook up some memories. At \
                 HomeTown, we believe your kitchen deserves just as much love and \
                 care as any other room in your home. Whether it’s your quiet morning \
                 coffee spot, a lively family gathering place, or a quick pit stop \
                 before a busy day, your kitchen can be anything you want it to be.",
                "No matter your style or needs, HomeTown offers everything you need \
                 to bring your dream kitchen to life, from stylish finishes to smart \
                 storage solutions. Our collection is designed to make your space \
                 both functional and beautiful. Explore our range of fully \
                 customizable kitchen designs, furniture, crockery, and accessories \
                 thoughtfully crafted to add charm, convenience, and style to your \
                 cooking space.",
            ],
        },
        Section {
            heading: "Living Room Furniture",
            paragraphs: &[
                "When you’ve got the kind of style and grandeur in your kitchen and \
                 bedroom that only HomeTown can provide, you need a living room to \
                 match. At HomeTown, we believe your living room should reflect your \
                 personality and love for your home.",
                "Whether you’re hosting a dinner party, relaxing with friends, or \
                 spending quality time with family, we have everything from swivel \
                 chairs to space-saving sofas, stylish bookshelves, sleek TV \
                 cabinets, and of course, comfy recliner sofas.",
            ],
        },
        Section {
            heading: "Dining Room Furniture",
            paragraphs: &[
                "Dining is more than just meals—it’s about sharing moments. At \
                 HomeTown, our dining room furniture is designed to bring people \
                 together in style. From compact dining sets for small apartments to \
                 large, elegant tables for family feasts, our collection covers it \
                 all.",
            ],
        },
        Section {
            heading: "Bedroom Furniture",
            paragraphs: &[
                "Your bedroom is your sanctuary, a place to rest, recharge, and \
                 dream. HomeTown offers a range of bedroom furniture that combines \
                 comfort with style. From cozy beds with storage options to chic side \
                 tables, wardrobes, and dressers, every piece is built to last and \
                 designed to match your aesthetic.",
            ],
        },
        Section {
            heading: "Office Furniture",
            paragraphs: &[
                "Work from home or set up your dream office with our ergonomic and \
                 stylish office furniture. From height-adjustable chairs and spacious \
                 desks to compact study tables and sleek bookshelves, HomeTown \
                 provides solutions that make working from home productive and \
                 comfortable.",
            ],
        },
    ],
};
