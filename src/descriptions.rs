// region:  --- Attributes

pub const MODIFIER: &str = r#"
FOR, DES, CON, INT, SAB, CAR. O Modificador é calculado por (Atributo - 10) / 2, arredondado para baixo. É o valor chave para testes e rolagens.
"#;

// endregion:  --- Attributes

// region:  --- Death

pub const NEAR_DEATH: &str = r#"
Ao atingir 0 HP, o personagem entra em Quase Morte. A cada rodada, faz um Teste de Morte (1d20 + CON). Sucesso: 1 sucesso; Falha: 1 falha. Com 3 falhas, ocorre a Morte. Com 3 sucessos, o personagem está Estabilizado.
"#;

// endregion:  --- Death

// region:  --- Combat

pub const COMBAT_ACTIONS: &[(&str, &str)] = &[
    ("CA", "Classe de Armadura (10 + Mod. CON). Sua defesa contra ataques."),
    ("Movimento", "Permite se deslocar dentro do limite (normalmente 6 quadrados)."),
    ("Ação Padrão", "O ataque ou uso de habilidade principal."),
    ("Ação Livre", "Pequena ação (soltar um item, falar) que não gasta o turno."),
    ("Rodada Completa", "O turno de todos os participantes."),
    ("Esquiva", "Ação para aumentar sua CA contra um ataque."),
    ("Contra-ataque", "Ação de reação para atacar após desviar."),
    ("Manobras", "Agarrar, Imobilizar, Empurrar, requerem Testes Opostos."),
];

pub const CHOREOGRAPHY: &str = r#"
A Coreografia é uma ação especial onde dois ou mais personagens trabalham juntos para um efeito dramático. Requer que os jogadores descrevam a ação em conjunto e realizem Testes de Atributo Simultâneos. Se a maioria for bem-sucedida, o efeito é amplificado, resultando em dano ou efeitos adicionais.
"#;

pub const CHOREOGRAPHY_EXAMPLE: &str = r#"
Um Combatente e um Manipulador se unem. O Combatente distrai (Teste FOR) enquanto o Manipulador canaliza (Teste INT). Se ambos passarem, o dano é crítico.
"#;

// endregion:  --- Combat

// region:  --- Fluxo

pub const FLUXO: &str = r#"
O Fluxo é a fonte de todo o poder. Sua manipulação é regida pela Vontade (CAR) e Conhecimento (INT).
"#;

pub const FLUXO_EVOLUTION: &str = r#"
O acesso inicial ao Fluxo depende da Classe. A Evolução ocorre através da prática e da realização de feitos épicos que aumentam o nível de domínio (PdH) do personagem.
"#;

pub const FLUXO_DISTORTION: &str = r#"
Usar o Fluxo em excesso ou em estados emocionais instáveis pode levar à Distorsão, causando efeitos colaterais imprevisíveis, desde exaustão até mudanças físicas permanentes.
"#;

pub const FLUXO_UNIQUE_ABILITY: &str = r#"
Cada Manipulador, Evocador ou Combatente tem uma manifestação única do Fluxo. Ela deve ser definida pelo jogador em um formulário guiado que estabelece seu Nome, Efeito, Custo em PdH e Condição de Uso.
"#;

// endregion:  --- Fluxo
