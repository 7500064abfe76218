//! Curated records served alongside, or instead of, live data.

use crate::types::{BookExtras, CatalogRecord, Extras, SeriesExtras, SourceKind};

/// Curated books whose cover is always taken from a matching live record.
pub const PREFER_LIVE_COVER: &[&str] = &["frankenstein", "dracula"];

struct CuratedBook {
    id: &'static str,
    title: &'static str,
    original_title: &'static str,
    author: &'static str,
    year: i32,
    publisher: &'static str,
    synopsis: &'static str,
    cover: &'static str,
    category: &'static str,
    rating: f64,
}

struct FallbackSeries {
    id: &'static str,
    title: &'static str,
    year: i32,
    creators: &'static str,
    synopsis: &'static str,
    poster: &'static str,
    seasons: u32,
    streaming: &'static str,
    genre: &'static str,
    rating: Option<f64>,
}

const RECOMMENDED_BOOKS: &[CuratedBook] = &[
    CuratedBook {
        id: "o-iluminado",
        title: "O Iluminado",
        original_title: "The Shining",
        author: "Stephen King",
        year: 1977,
        publisher: "Suma",
        synopsis: "Jack Torrance, um aspirante a escritor e alcoólatra em recuperação, aceita um emprego como zelador de inverno no isolado Hotel Overlook, nas montanhas do Colorado. Ele se muda com sua esposa, Wendy, e seu filho, Danny, que possui 'o brilho', uma habilidade psíquica. O hotel, assombrado por eventos passados, exerce uma influência malévola sobre Jack, levando-o à loucura e violência.",
        cover: "https://covers.openlibrary.org/b/isbn/0385121679-L.jpg",
        category: "Horror, Sobrenatural",
        rating: 9.5,
    },
    CuratedBook {
        id: "dracula",
        title: "Drácula",
        original_title: "Dracula",
        author: "Bram Stoker",
        year: 1897,
        publisher: "Darkside",
        synopsis: "O romance narra a história do Conde Drácula, um vampiro da Transilvânia que se muda para a Inglaterra em busca de sangue novo e para espalhar sua maldição. Um pequeno grupo, liderado pelo Professor Abraham Van Helsing, luta para detê-lo.",
        cover: "https://covers.openlibrary.org/b/isbn/9780141439846-L.jpg",
        category: "Horror, Vampiros",
        rating: 9.3,
    },
    CuratedBook {
        id: "frankenstein",
        title: "Frankenstein",
        original_title: "Frankenstein",
        author: "Mary Shelley",
        year: 1818,
        publisher: "Darkside",
        synopsis: "Victor Frankenstein, um jovem cientista, cria uma criatura grotesca em um experimento científico pouco ortodoxo. Horrorizado com sua criação, Victor a abandona. A criatura, rejeitada pela sociedade, busca vingança contra seu criador.",
        cover: "https://covers.openlibrary.org/b/isbn/0486282112-L.jpg",
        category: "Horror, Ficção Científica",
        rating: 9.2,
    },
    CuratedBook {
        id: "o-exorcista",
        title: "O Exorcista",
        original_title: "The Exorcist",
        author: "William Peter Blatty",
        year: 1971,
        publisher: "Harper",
        synopsis: "Regan MacNeil, uma menina de 12 anos, é possuída por uma entidade demoníaca. Sua mãe, desesperada, busca a ajuda de dois padres para realizar um exorcismo e salvar sua filha.",
        cover: "https://covers.openlibrary.org/b/isbn/0061007226-L.jpg",
        category: "Horror, Possessão",
        rating: 9.4,
    },
    CuratedBook {
        id: "assombracao-casa-colina",
        title: "A Assombração da Casa da Colina",
        original_title: "The Haunting of Hill House",
        author: "Shirley Jackson",
        year: 1959,
        publisher: "DarkSide",
        synopsis: "Dr. Montague, um investigador do sobrenatural, aluga a Casa da Colina, uma mansão com fama de assombrada, para um estudo. Ele convida três pessoas, incluindo a tímida Eleanor Vance, que desenvolve uma estranha conexão com a casa.",
        cover: "https://covers.openlibrary.org/b/isbn/0143122355-L.jpg",
        category: "Horror, Casa Assombrada",
        rating: 9.1,
    },
    CuratedBook {
        id: "psicose",
        title: "Psicose",
        original_title: "Psycho",
        author: "Robert Bloch",
        year: 1959,
        publisher: "Darkside",
        synopsis: "Marion Crane, uma secretária, rouba 40 mil dólares e foge. Durante sua fuga, ela para no Motel Bates, administrado pelo recluso e estranho Norman Bates e sua mãe dominadora. O que acontece a seguir é um dos maiores choques da literatura de suspense.",
        cover: "https://covers.openlibrary.org/b/isbn/0765357305-L.jpg",
        category: "Horror, Suspense",
        rating: 9.0,
    },
    CuratedBook {
        id: "chamado-cthulhu",
        title: "O Chamado de Cthulhu",
        original_title: "The Call of Cthulhu",
        author: "H.P. Lovecraft",
        year: 1928,
        publisher: "DarkSide",
        synopsis: "Uma coleção de contos que introduz o panteão de entidades cósmicas conhecidas como os Grandes Antigos. A história principal segue a investigação de um culto que adora a entidade Cthulhu, que dorme em sua cidade submersa de R'lyeh, esperando para despertar e dominar o mundo.",
        cover: "https://covers.openlibrary.org/b/isbn/0143106481-L.jpg",
        category: "Horror Cósmico",
        rating: 9.6,
    },
    CuratedBook {
        id: "bebe-rosemary",
        title: "O Bebê de Rosemary",
        original_title: "Rosemary's Baby",
        author: "Ira Levin",
        year: 1967,
        publisher: "Record",
        synopsis: "Rosemary Woodhouse e seu marido, Guy, se mudam para um apartamento em Nova York com uma reputação sinistra. Após Rosemary engravidar, ela começa a suspeitar que seus vizinhos idosos e seu próprio marido têm planos malignos para seu bebê.",
        cover: "https://covers.openlibrary.org/b/isbn/0451194004-L.jpg",
        category: "Horror, Suspense",
        rating: 8.9,
    },
    CuratedBook {
        id: "eu-sou-lenda",
        title: "Eu Sou a Lenda",
        original_title: "I Am Legend",
        author: "Richard Matheson",
        year: 1954,
        publisher: "DarkSide",
        synopsis: "Robert Neville é o último homem vivo na Terra... ou assim ele pensa. O resto da humanidade foi transformado em vampiros sedentos de sangue, e Neville deve lutar para sobreviver todas as noites enquanto busca uma cura durante o dia.",
        cover: "https://covers.openlibrary.org/b/isbn/0765357151-L.jpg",
        category: "Horror, Pós-Apocalíptico",
        rating: 9.2,
    },
    CuratedBook {
        id: "it-coisa",
        title: "It: A Coisa",
        original_title: "It",
        author: "Stephen King",
        year: 1986,
        publisher: "Suma",
        synopsis: "Em Derry, uma pequena cidade no Maine, sete crianças conhecidas como 'O Clube dos Perdedores' enfrentam uma criatura antiga que ressurge a cada 27 anos para se alimentar do medo das crianças, assumindo a forma de seus piores pesadelos, mais comumente o palhaço Pennywise.",
        cover: "https://covers.openlibrary.org/b/isbn/0670813028-L.jpg",
        category: "Horror, Sobrenatural",
        rating: 9.7,
    },
];

const FALLBACK_SERIES: &[FallbackSeries] = &[
    FallbackSeries { id: "serie1", title: "The Walking Dead", year: 2010, creators: "Frank Darabont", synopsis: "Sobreviventes lutam em mundo pós-apocalíptico dominado por zumbis.", poster: "https://image.tmdb.org/t/p/w500/xf9wuDcqlUPWABZNeDKPbZUjWx0.jpg", seasons: 11, streaming: "Netflix, Prime Video", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie2", title: "Stranger Things", year: 2016, creators: "Irmãos Duffer", synopsis: "Crianças enfrentam criaturas sobrenaturais em cidade dos anos 80.", poster: "https://image.tmdb.org/t/p/w500/49WJfeN0moxb9IPfGn8AIqMGskD.jpg", seasons: 4, streaming: "Netflix", genre: "Horror, Sci-Fi", rating: None },
    FallbackSeries { id: "serie3", title: "American Horror Story", year: 2011, creators: "Ryan Murphy, Brad Falchuk", synopsis: "Antologia com diferentes histórias de terror a cada temporada.", poster: "https://image.tmdb.org/t/p/w500/qRbGYQI4CFSUX2M8CzYzPb9cOCi.jpg", seasons: 12, streaming: "Disney+", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie4", title: "The Haunting of Hill House", year: 2018, creators: "Mike Flanagan", synopsis: "Família confronta trauma de casa assombrada que habitaram na infância.", poster: "https://image.tmdb.org/t/p/w500/6TXZ7DRxyXRmYFc14rIHWZSMKfO.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie5", title: "Bates Motel", year: 2013, creators: "Carlton Cuse, Kerry Ehrin", synopsis: "Prequel de Psicose mostrando juventude de Norman Bates.", poster: "https://image.tmdb.org/t/p/w500/1dLyLTl4Ea5PFZnmSpEAqQYMqk7.jpg", seasons: 5, streaming: "Netflix, Prime Video", genre: "Horror, Thriller", rating: None },
    FallbackSeries { id: "serie6", title: "The Terror", year: 2018, creators: "David Kajganich", synopsis: "Antologia sobre expedições históricas que encontraram o horror.", poster: "https://image.tmdb.org/t/p/w500/7w0EtEh4aMfN2pNd4jNnP4lsFrO.jpg", seasons: 2, streaming: "Prime Video", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie7", title: "Penny Dreadful", year: 2014, creators: "John Logan", synopsis: "Personagens literários de terror se unem em Londres vitoriana.", poster: "https://image.tmdb.org/t/p/w500/eWj5GBhsrCgJxNAeQPQj7DK3yHc.jpg", seasons: 3, streaming: "Paramount+", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie8", title: "The Midnight Club", year: 2022, creators: "Mike Flanagan", synopsis: "Jovens terminais contam histórias de terror em hospice à meia-noite.", poster: "https://image.tmdb.org/t/p/w500/3NQSWMCM4LKZqcwqvuSXqMdmIqE.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie9", title: "Marianne", year: 2019, creators: "Samuel Bodin", synopsis: "Escritora de terror descobre que bruxa de seus livros é real.", poster: "https://image.tmdb.org/t/p/w500/n4S0PJwvQPMU1cY0zEZhNzAXGA8.jpg", seasons: 1, streaming: "Netflix", genre: "Horror", rating: None },
    FallbackSeries { id: "serie10", title: "Channel Zero", year: 2016, creators: "Nick Antosca", synopsis: "Antologia baseada em creepypastas da internet.", poster: "https://image.tmdb.org/t/p/w500/qzFmDq8KqL8FpTa6JBBR54a8hUC.jpg", seasons: 4, streaming: "Shudder", genre: "Horror", rating: None },
    FallbackSeries { id: "serie11", title: "Evil", year: 2019, creators: "Robert e Michelle King", synopsis: "Psicóloga e padre investigam fenômenos inexplicáveis.", poster: "https://image.tmdb.org/t/p/w500/wPvVyFp6BZwf0FyFCfGPiYWjDrg.jpg", seasons: 4, streaming: "Paramount+", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie12", title: "Yellowjackets", year: 2021, creators: "Ashley Lyle, Bart Nickerson", synopsis: "Time de futebol feminino sobrevive a acidente e seus segredos sombrios.", poster: "https://image.tmdb.org/t/p/w500/kS0JkVrYuaKeOJrMNLtYJHCq07I.jpg", seasons: 2, streaming: "Paramount+", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie13", title: "Chapelwaite", year: 2021, creators: "Peter e Jason Filardi", synopsis: "Baseado em Stephen King, família enfrenta maldição ancestral.", poster: "https://image.tmdb.org/t/p/w500/aKmRXqyLNRmTqF07w9JTxcEZPVz.jpg", seasons: 1, streaming: "Prime Video", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie14", title: "From", year: 2022, creators: "John Griffin", synopsis: "Cidade misteriosa prende visitantes e criaturas noturnas os caçam.", poster: "https://image.tmdb.org/t/p/w500/cjXLrg4f4Fb29plorfCeTSWHmyn.jpg", seasons: 3, streaming: "Prime Video", genre: "Horror, Mystery", rating: None },
    FallbackSeries { id: "serie15", title: "The Outsider", year: 2020, creators: "Richard Price", synopsis: "Investigação de assassinato revela forças sobrenaturais.", poster: "https://image.tmdb.org/t/p/w500/eMTa6CWvUdzZDhwQJOcYPOG93yd.jpg", seasons: 1, streaming: "HBO Max", genre: "Horror, Mystery", rating: None },
    FallbackSeries { id: "serie16", title: "Archive 81", year: 2022, creators: "Rebecca Sonnenshine", synopsis: "Arquivista descobre mistério sinistro ao restaurar fitas VHS.", poster: "https://image.tmdb.org/t/p/w500/2NXADK6fDhxwQBPYPEZoiHJv0cJ.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Mystery", rating: None },
    FallbackSeries { id: "serie17", title: "Servant", year: 2019, creators: "Tony Basgallop", synopsis: "Casal contrata babá misteriosa após tragédia familiar.", poster: "https://image.tmdb.org/t/p/w500/n4uZeYZtY1UWv3AEHTCB2R1YQIx.jpg", seasons: 4, streaming: "Apple TV+", genre: "Horror, Thriller", rating: None },
    FallbackSeries { id: "serie18", title: "Lovecraft Country", year: 2020, creators: "Misha Green", synopsis: "Homem negro enfrenta racismo e terror lovecraftiano nos anos 50.", poster: "https://image.tmdb.org/t/p/w500/6mIKHERADILbBBXbYg53lDwE1CQ.jpg", seasons: 1, streaming: "HBO Max", genre: "Horror, Drama", rating: None },
    FallbackSeries { id: "serie19", title: "Brand New Cherry Flavor", year: 2021, creators: "Nick Antosca, Lenore Zion", synopsis: "Cineasta busca vingança com magia negra na Hollywood dos anos 90.", poster: "https://image.tmdb.org/t/p/w500/qWzQQvHwnJBjT43NiKfqaXKnU68.jpg", seasons: 1, streaming: "Netflix", genre: "Horror", rating: None },
    FallbackSeries { id: "serie20", title: "The Fall of the House of Usher", year: 2023, creators: "Mike Flanagan", synopsis: "Família poderosa enfrenta consequências de pacto sombrio.", poster: "https://image.tmdb.org/t/p/w500/2rl04pRCaGfz91lwfWdDQmOiGJp.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Drama", rating: Some(8.1) },
    FallbackSeries { id: "serie21", title: "Wednesday", year: 2022, creators: "Alfred Gough, Miles Millar", synopsis: "Wednesday Addams investiga mistérios sobrenaturais em escola peculiar.", poster: "https://image.tmdb.org/t/p/w500/9PFonBhy4cQy7Jz20NpMygczOkv.jpg", seasons: 2, streaming: "Netflix", genre: "Horror, Comédia", rating: Some(8.5) },
    FallbackSeries { id: "serie22", title: "The Watcher", year: 2022, creators: "Ryan Murphy, Ian Brennan", synopsis: "Família recebe cartas ameaçadoras de observador anônimo em nova casa.", poster: "https://image.tmdb.org/t/p/w500/6RrseODZo2e66XOzC1XMzMuecnf.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Thriller", rating: Some(7.3) },
    FallbackSeries { id: "serie23", title: "Midnight Mass", year: 2021, creators: "Mike Flanagan", synopsis: "Comunidade isolada experimenta eventos miraculosos e sinistros.", poster: "https://image.tmdb.org/t/p/w500/iYoMZYVD775CQRqCcGbD8nZcLqP.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Drama", rating: Some(7.7) },
    FallbackSeries { id: "serie24", title: "The Haunting of Bly Manor", year: 2020, creators: "Mike Flanagan", synopsis: "Babá cuida de crianças em mansão inglesa assombrada por fantasmas.", poster: "https://image.tmdb.org/t/p/w500/vIXQ85eeJtSld9nR6aq58gDdmbI.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Romance", rating: Some(7.4) },
    FallbackSeries { id: "serie25", title: "Chucky", year: 2021, creators: "Don Mancini", synopsis: "Boneco assassino Chucky retorna para aterrorizar nova cidade.", poster: "https://image.tmdb.org/t/p/w500/kY0BogCM8SkNJ0MNiHB3VTM86Tz.jpg", seasons: 3, streaming: "Paramount+", genre: "Horror, Comédia", rating: Some(7.5) },
    FallbackSeries { id: "serie26", title: "Evil Dead Rise", year: 2023, creators: "Lee Cronin", synopsis: "Irmãs enfrentam demônios em prédio de Los Angeles.", poster: "https://image.tmdb.org/t/p/w500/5ik4ATKmNtmJU6AYD0bLm56BCVM.jpg", seasons: 1, streaming: "HBO Max", genre: "Horror", rating: Some(6.8) },
    FallbackSeries { id: "serie27", title: "The Last of Us", year: 2023, creators: "Craig Mazin, Neil Druckmann", synopsis: "Sobrevivente e jovem atravessam América pós-apocalíptica.", poster: "https://image.tmdb.org/t/p/w500/uKvVjHNqB5VmOrdxqAt2F7J78ED.jpg", seasons: 2, streaming: "HBO Max", genre: "Horror, Drama", rating: Some(8.8) },
    FallbackSeries { id: "serie28", title: "Goosebumps", year: 2023, creators: "Rob Letterman, Nicholas Stoller", synopsis: "Adolescentes liberam criaturas dos livros de R.L. Stine.", poster: "https://image.tmdb.org/t/p/w500/fPNJBt1r8YqHLjJPGlb0Q5JQNK7.jpg", seasons: 1, streaming: "Disney+", genre: "Horror, Aventura", rating: Some(7.2) },
    FallbackSeries { id: "serie29", title: "The Changeling", year: 2023, creators: "Kelly Marcel", synopsis: "Pai descobre segredos sombrios sobre esposa e filho.", poster: "https://image.tmdb.org/t/p/w500/sn24UmYl3FeZ1JVCqxjqvh6Yiyv.jpg", seasons: 1, streaming: "Apple TV+", genre: "Horror, Fantasia", rating: Some(7.0) },
    FallbackSeries { id: "serie30", title: "Shining Vale", year: 2022, creators: "Sharon Horgan, Jeff Astrof", synopsis: "Família se muda para casa assombrada ou mãe está enlouquecendo?", poster: "https://image.tmdb.org/t/p/w500/cHgPHYhqNlGsMAHOsIjkZ6ek4yj.jpg", seasons: 2, streaming: "Paramount+", genre: "Horror, Comédia", rating: Some(6.9) },
    FallbackSeries { id: "serie31", title: "Invasion", year: 2021, creators: "Simon Kinberg, David Weil", synopsis: "Invasão alienígena vista através de múltiplas perspectivas globais.", poster: "https://image.tmdb.org/t/p/w500/q5PlkescqNqHE41e2ykDPKMpazk.jpg", seasons: 2, streaming: "Apple TV+", genre: "Horror, Sci-Fi", rating: Some(6.7) },
    FallbackSeries { id: "serie32", title: "1899", year: 2022, creators: "Baran bo Odar, Jantje Friese", synopsis: "Imigrantes em navio a vapor encontram mistério em alto-mar.", poster: "https://image.tmdb.org/t/p/w500/hNdwlXjD2aNyN9C0Hfx5QpuNs7J.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Mystery", rating: Some(7.5) },
    FallbackSeries { id: "serie33", title: "Cabinet of Curiosities", year: 2022, creators: "Guillermo del Toro", synopsis: "Antologia de contos macabros selecionados por del Toro.", poster: "https://image.tmdb.org/t/p/w500/kEoWt9TBzuXfPkW3BLmqMh0pHBY.jpg", seasons: 1, streaming: "Netflix", genre: "Horror", rating: Some(7.3) },
    FallbackSeries { id: "serie34", title: "The Bastard Son & The Devil Himself", year: 2022, creators: "Joe Barton", synopsis: "Jovem bruxo foge de pai maligno e descobre seus poderes.", poster: "https://image.tmdb.org/t/p/w500/ifzMBhKZF5pPRPYMymNjSYd57Ej.jpg", seasons: 1, streaming: "Netflix", genre: "Horror, Fantasia", rating: Some(7.6) },
    FallbackSeries { id: "serie35", title: "Castle Rock", year: 2018, creators: "Sam Shaw, Dustin Thomason", synopsis: "Antologia baseada no universo de Stephen King.", poster: "https://image.tmdb.org/t/p/w500/6DNXmkJr7WosxIE39Wkbdpb3YVu.jpg", seasons: 2, streaming: "HBO Max", genre: "Horror, Drama", rating: Some(7.5) },
];

/// Hand-picked books, in display order. Never dropped by a failed live fetch.
pub fn recommended_books() -> Vec<CatalogRecord> {
    RECOMMENDED_BOOKS
        .iter()
        .map(|b| CatalogRecord {
            id: b.id.to_string(),
            title: b.title.to_string(),
            original_title: Some(b.original_title.to_string()),
            creators: b.author.to_string(),
            year: Some(b.year),
            synopsis: b.synopsis.to_string(),
            cover_image: b.cover.to_string(),
            category: b.category.to_string(),
            source_kind: SourceKind::Recommended,
            rating: Some(b.rating),
            extras: Extras::Book(BookExtras { edition_count: 0, preview_link: None, publisher: Some(b.publisher.to_string()) }),
        })
        .collect()
}

/// Series shown when discovery is unavailable, and merged in behind live results.
pub fn fallback_series() -> Vec<CatalogRecord> {
    FALLBACK_SERIES
        .iter()
        .map(|s| CatalogRecord {
            id: s.id.to_string(),
            title: s.title.to_string(),
            original_title: None,
            creators: s.creators.to_string(),
            year: Some(s.year),
            synopsis: s.synopsis.to_string(),
            cover_image: s.poster.to_string(),
            category: s.genre.to_string(),
            source_kind: SourceKind::Recommended,
            rating: s.rating,
            extras: Extras::Series(SeriesExtras {
                seasons: Some(s.seasons),
                streaming_provider: s.streaming.to_string(),
                ..SeriesExtras::default()
            }),
        })
        .collect()
}
