//! Embedded resource data.
//!
//! Field and sub-field ordering here is the ordering the UI presents.

use super::{FieldEntry, SubFieldEntry};
use crate::domain::catalog::{ResourceRecord, ResourceType};

use ResourceType::{Article, Book, Course, Website, YouTubeChannel};

fn rec(title: &str, resource_type: ResourceType, link: &str) -> ResourceRecord {
    ResourceRecord::new(title, resource_type, link)
}

fn sub(name: &'static str, resources: Vec<ResourceRecord>) -> SubFieldEntry {
    SubFieldEntry { name, resources }
}

pub(crate) fn builtin_fields() -> Vec<FieldEntry> {
    vec![
        FieldEntry {
            name: "Programming",
            sub_fields: vec![
                sub("Python", vec![
                    rec("Learn Python the Hard Way", Book, "https://learnpythonthehardway.org/"),
                    rec("Eric Mathes Python Crash Course PDF", Book, "https://khwarizmi.org/wp-content/uploads/2021/04/Eric_Matthes_Python_Crash_Course_A_Hands.pdf"),
                    rec("Automate the Boring Stuff with Python", Course, "https://automatetheboringstuff.com/"),
                    rec("Corey Schafer's Python Tutorials", YouTubeChannel, "https://www.youtube.com/user/schafer5"),
                    rec("Python Crash Course - Panaversity", YouTubeChannel, "https://www.youtube.com/playlist?list=PL0vKVrkG4hWrEujmnC7v2mSiaXMV_Tfu0"),
                    rec("Code With Mosh Python Tutorial", YouTubeChannel, "https://www.youtube.com/watch?v=K5KVEU3aaeQ&t=866s"),
                    rec("Python for Data Science 2024", Course, "https://www.coursera.org/specializations/python-data-science"),
                    rec("Advanced Python Programming 2025", Book, "https://www.oreilly.com/library/view/advanced-python-programming/9781492051367/"),
                ]),
                sub("JavaScript", vec![
                    rec("Eloquent JavaScript", Book, "https://eloquentjavascript.net/"),
                    rec("JavaScript.info", Article, "https://javascript.info/"),
                    rec("Traversy Media", YouTubeChannel, "https://www.youtube.com/user/TechGuyWeb"),
                    rec("Javascript Beginners Course - FreeCodeCamp", YouTubeChannel, "https://www.youtube.com/watch?v=Zi-Q0t4gMC8"),
                    rec("Modern JavaScript 2024", Course, "https://www.udemy.com/course/modern-javascript/"),
                    rec("JavaScript Frameworks 2025", Book, "https://www.manning.com/books/javascript-frameworks"),
                ]),
                sub("Java", vec![
                    rec("Effective Java", Book, "https://www.oreilly.com/library/view/effective-java/9780134686097/"),
                    rec("Java Programming and Software Engineering Fundamentals", Course, "https://www.coursera.org/specializations/java-programming"),
                    rec("Java Brains", YouTubeChannel, "https://www.youtube.com/user/koushks"),
                    rec("FreeCodeCamps Java Tutorial", YouTubeChannel, "https://www.youtube.com/watch?v=A74TOX803D0"),
                    rec("Java for Beginners 2024", Course, "https://www.udemy.com/course/java-for-beginners/"),
                    rec("Advanced Java Programming 2025", Book, "https://www.oreilly.com/library/view/advanced-java-programming/9781492051367/"),
                ]),
                sub("C++", vec![
                    rec("C++ Primer", Book, "https://www.oreilly.com/library/view/c-primer-5th/9780133053043/"),
                    rec("The Cherno", YouTubeChannel, "https://www.youtube.com/user/TheChernoProject"),
                    rec("FreeCodeCamp C++ Tutorial", YouTubeChannel, "https://www.youtube.com/watch?v=8jLOx1hD3_o"),
                    rec("C++ for Game Development 2024", Course, "https://www.udemy.com/course/cpp-for-game-development/"),
                    rec("Advanced C++ Programming 2025", Book, "https://www.oreilly.com/library/view/advanced-c-programming/9781492051367/"),
                ]),
                sub("Ruby", vec![
                    rec("The Well-Grounded Rubyist", Book, "https://www.manning.com/books/the-well-grounded-rubyist-third-edition"),
                    rec("Ruby on Rails Tutorial", Course, "https://www.railstutorial.org/"),
                    rec("Ruby for Web Development 2024", Course, "https://www.udemy.com/course/ruby-for-web-development/"),
                    rec("Advanced Ruby Programming 2025", Book, "https://www.oreilly.com/library/view/advanced-ruby-programming/9781492051367/"),
                ]),
                sub("AI/ML", vec![
                    rec("Deep Learning Specialization by Andrew Ng", Course, "https://www.coursera.org/specializations/deep-learning"),
                    rec("Hands-On Machine Learning with Scikit-Learn, Keras, and TensorFlow", Book, "https://www.oreilly.com/library/view/hands-on-machine-learning/9781492032632/"),
                    rec("3Blue1Brown - Neural Networks", YouTubeChannel, "https://www.youtube.com/c/3blue1brown"),
                    rec("Krish Naik - AI/ML Tutorials", YouTubeChannel, "https://www.youtube.com/c/KrishNaik"),
                    rec("Fast.ai - Practical Deep Learning for Coders", Course, "https://www.fast.ai/"),
                    rec("StatQuest with Josh Starmer", YouTubeChannel, "https://www.youtube.com/c/joshstarmer"),
                    rec("Google Machine Learning Crash Course", Course, "https://developers.google.com/machine-learning/crash-course"),
                    rec("AI/ML Trends 2024", Article, "https://www.towardsdatascience.com/ai-ml-trends-2024"),
                    rec("Advanced AI/ML Techniques 2025", Book, "https://www.oreilly.com/library/view/advanced-ai-ml-techniques/9781492051367/"),
                ]),
            ],
        },
        FieldEntry {
            name: "Reading",
            sub_fields: vec![
                sub("Fiction", vec![
                    rec("The Great Gatsby", Book, "https://www.goodreads.com/book/show/4671.The_Great_Gatsby"),
                    rec("1984 by George Orwell", Book, "https://www.goodreads.com/book/show/5470.1984"),
                    rec("BookTubers to Follow", YouTubeChannel, "https://www.youtube.com/results?search_query=booktubers"),
                    rec("Best Fiction Books 2024", Article, "https://www.goodreads.com/list/show/175351.Best_Fiction_Books_2024"),
                ]),
                sub("Non-fiction", vec![
                    rec("Sapiens: A Brief History of Humankind", Book, "https://www.goodreads.com/book/show/23692271-sapiens"),
                    rec("TED Talks", YouTubeChannel, "https://www.youtube.com/user/TEDtalksDirector"),
                    rec("Best Non-Fiction Books 2024", Article, "https://www.goodreads.com/list/show/175352.Best_Non_Fiction_Books_2024"),
                ]),
                sub("Science Fiction", vec![
                    rec("Dune by Frank Herbert", Book, "https://www.goodreads.com/book/show/44767458-dune"),
                    rec("Sci-Fi Book Recommendations", YouTubeChannel, "https://www.youtube.com/results?search_query=sci-fi+books"),
                    rec("Best Sci-Fi Books 2024", Article, "https://www.goodreads.com/list/show/175353.Best_Sci_Fi_Books_2024"),
                ]),
                sub("Fantasy", vec![
                    rec("The Hobbit by J.R.R. Tolkien", Book, "https://www.goodreads.com/book/show/5907.The_Hobbit_or_There_and_Back_Again"),
                    rec("Fantasy Book Reviews", YouTubeChannel, "https://www.youtube.com/results?search_query=fantasy+book+reviews"),
                    rec("Best Fantasy Books 2024", Article, "https://www.goodreads.com/list/show/175354.Best_Fantasy_Books_2024"),
                ]),
                sub("Biography", vec![
                    rec("Steve Jobs by Walter Isaacson", Book, "https://www.goodreads.com/book/show/11084145-steve-jobs"),
                    rec("Biographies to Read", YouTubeChannel, "https://www.youtube.com/results?search_query=biographies"),
                    rec("Best Biographies 2024", Article, "https://www.goodreads.com/list/show/175355.Best_Biographies_2024"),
                ]),
            ],
        },
        FieldEntry {
            name: "Gaming",
            sub_fields: vec![
                sub("Action", vec![
                    rec("Game Development with Unity", Course, "https://unity.com/learn"),
                    rec("Brackeys", YouTubeChannel, "https://www.youtube.com/user/Brackeys"),
                    rec("Best Action Games 2024", Article, "https://www.ign.com/lists/best-action-games-2024"),
                ]),
                sub("Adventure", vec![
                    rec("Game Design and Development", Course, "https://www.coursera.org/specializations/game-design"),
                    rec("Extra Credits", YouTubeChannel, "https://www.youtube.com/user/ExtraCreditz"),
                    rec("Best Adventure Games 2024", Article, "https://www.ign.com/lists/best-adventure-games-2024"),
                ]),
                sub("Strategy", vec![
                    rec("The Art of Game Design", Book, "https://www.goodreads.com/book/show/409640.The_Art_of_Game_Design"),
                    rec("GDC", YouTubeChannel, "https://www.youtube.com/user/gdconf"),
                    rec("Best Strategy Games 2024", Article, "https://www.ign.com/lists/best-strategy-games-2024"),
                ]),
                sub("RPG", vec![
                    rec("RPG Maker Tutorials", Course, "https://www.rpgmakerweb.com/support/tutorial"),
                    rec("RPG Limit Break", YouTubeChannel, "https://www.youtube.com/user/RPGLimitBreak"),
                    rec("Best RPG Games 2024", Article, "https://www.ign.com/lists/best-rpg-games-2024"),
                ]),
                sub("Sports", vec![
                    rec("FIFA Coaching and Tips", YouTubeChannel, "https://www.youtube.com/user/EAFIFADevTeam"),
                    rec("Best Sports Games 2024", Article, "https://www.ign.com/lists/best-sports-games-2024"),
                ]),
            ],
        },
        FieldEntry {
            name: "Traveling",
            sub_fields: vec![
                sub("Adventure", vec![
                    rec("Lonely Planet Adventure Travel Guide", Website, "https://www.lonelyplanet.com/"),
                    rec("Best Adventure Travel Destinations", Article, "https://www.nationalgeographic.com/adventure/travel"),
                    rec("Top Adventure Travel Spots 2024", Article, "https://www.travelandleisure.com/top-adventure-travel-spots-2024"),
                ]),
                sub("Cultural", vec![
                    rec("Cultural Travel Guide", Website, "https://www.culturaltravelguide.com/"),
                    rec("UNESCO World Heritage Sites", Website, "https://whc.unesco.org/"),
                    rec("Top Cultural Destinations 2024", Article, "https://www.cntraveler.com/top-cultural-destinations-2024"),
                ]),
                sub("Beach", vec![
                    rec("Top Beach Destinations", Website, "https://www.travelchannel.com/interests/beaches/articles/top-beach-destinations"),
                    rec("Beach Travel Tips", Article, "https://www.travelandleisure.com/travel-tips/beach"),
                    rec("Best Beaches 2024", Article, "https://www.tripadvisor.com/best-beaches-2024"),
                ]),
                sub("Mountain", vec![
                    rec("Mountain Travel Guide", Website, "https://www.backpacker.com/"),
                    rec("Best Hiking Trails in the World", Article, "https://www.nationalgeographic.com/adventure/adventures/best-hikes/"),
                    rec("Top Mountain Destinations 2024", Article, "https://www.outsideonline.com/top-mountain-destinations-2024"),
                ]),
                sub("City", vec![
                    rec("Top City Destinations", Website, "https://www.cntraveler.com/galleries/2015-09-08/world-s-best-cities"),
                    rec("City Travel Tips", Article, "https://www.thetravel.com/best-city-travel-tips/"),
                    rec("Best Cities to Visit 2024", Article, "https://www.lonelyplanet.com/best-cities-to-visit-2024"),
                ]),
            ],
        },
        FieldEntry {
            name: "Cooking",
            sub_fields: vec![
                sub("Baking", vec![
                    rec("The Joy of Baking", Book, "https://www.goodreads.com/book/show/14494.Joy_of_Baking"),
                    rec("Cupcake Jemma", YouTubeChannel, "https://www.youtube.com/user/CupcakeJemma"),
                    rec("Best Baking Recipes 2024", Article, "https://www.allrecipes.com/best-baking-recipes-2024"),
                ]),
                sub("Grilling", vec![
                    rec("The Barbecue Bible", Book, "https://www.goodreads.com/book/show/527234.The_Barbecue_Bible"),
                    rec("BBQ Pit Boys", YouTubeChannel, "https://www.youtube.com/user/BarbecueWeb"),
                    rec("Best Grilling Recipes 2024", Article, "https://www.allrecipes.com/best-grilling-recipes-2024"),
                ]),
                sub("Vegetarian", vec![
                    rec("Vegetarian Cooking for Everyone", Book, "https://www.goodreads.com/book/show/61913.Vegetarian_Cooking_for_Everyone"),
                    rec("Pick Up Limes", YouTubeChannel, "https://www.youtube.com/channel/UCq2E1mIwUKMWzCA4liA_XGQ"),
                    rec("Best Vegetarian Recipes 2024", Article, "https://www.allrecipes.com/best-vegetarian-recipes-2024"),
                ]),
                sub("Seafood", vec![
                    rec("Fish: Recipes from the Sea", Book, "https://www.goodreads.com/book/show/161303.Fish"),
                    rec("Bart’s Fish Tales", YouTubeChannel, "https://www.youtube.com/user/bartsfishtales"),
                    rec("Best Seafood Recipes 2024", Article, "https://www.allrecipes.com/best-seafood-recipes-2024"),
                ]),
                sub("Desserts", vec![
                    rec("The Art of French Pastry", Book, "https://www.goodreads.com/book/show/18167490-the-art-of-french-pastry"),
                    rec("Preppy Kitchen", YouTubeChannel, "https://www.youtube.com/channel/UCB4gFkDmRZ2fFTEZ3P8FI3g"),
                    rec("Best Dessert Recipes 2024", Article, "https://www.allrecipes.com/best-dessert-recipes-2024"),
                ]),
            ],
        },
        FieldEntry {
            name: "Sports",
            sub_fields: vec![
                sub("Football", vec![
                    rec("Coaching Soccer Tactics", YouTubeChannel, "https://www.youtube.com/user/LaureusTV"),
                    rec("Inverting The Pyramid: The History of Football Tactics", Book, "https://www.amazon.com/Inverting-Pyramid-History-Football-Tactics/dp/1409102041"),
                    rec("Best Football Drills 2024", Article, "https://www.soccercoachweekly.net/best-football-drills-2024"),
                ]),
                sub("Basketball", vec![
                    rec("Basketball Fundamentals", YouTubeChannel, "https://www.youtube.com/user/LaureusTV"),
                    rec("Basketball: Steps to Success", Book, "https://www.amazon.com/Basketball-Steps-Success/dp/0736067078"),
                    rec("Best Basketball Drills 2024", Article, "https://www.basketballforcoaches.com/best-basketball-drills-2024"),
                ]),
                sub("Cricket", vec![
                    rec("Cricket Coaching Tips", YouTubeChannel, "https://www.youtube.com/user/LaureusTV"),
                    rec("The Art of Cricket", Book, "https://www.amazon.com/Art-Cricket-Don-Bradman/dp/1405278242"),
                    rec("Best Cricket Drills 2024", Article, "https://www.cricketcoaching.com/best-cricket-drills-2024"),
                ]),
                sub("Tennis", vec![
                    rec("Tennis Instruction and Tips", YouTubeChannel, "https://www.youtube.com/user/LaureusTV"),
                    rec("Tennis Science for Tennis Players", Book, "https://www.amazon.com/Tennis-Science-Players-Howard-Brody/dp/0812213340"),
                    rec("Best Tennis Drills 2024", Article, "https://www.tenniscoaching.com/best-tennis-drills-2024"),
                ]),
                sub("Swimming", vec![
                    rec("Swimming Techniques", YouTubeChannel, "https://www.youtube.com/user/LaureusTV"),
                    rec("Total Immersion: The Revolutionary Way To Swim Better, Faster, and Easier", Book, "https://www.amazon.com/Total-Immersion-Revolutionary-Better-Faster/dp/0743253434"),
                    rec("Best Swimming Drills 2024", Article, "https://www.swimmingcoach.com/best-swimming-drills-2024"),
                ]),
            ],
        },
    ]
}
